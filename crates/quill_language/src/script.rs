//! Compiled constructs.
//!
//! A construct is the body of one command or event handler: a run of script
//! lines, each of which parses as an effect. Blank lines and `#` comments
//! are skipped but still count toward line numbers.

use quill_foundation::{Category, Context, Error, Result};

use crate::node::Node;
use crate::registry::ElementRegistry;

/// One parsed line.
#[derive(Clone, Debug)]
pub struct Statement {
    /// Source line number
    pub line: usize,
    /// Root effect node
    pub node: Node,
}

/// A parsed construct, ready to execute any number of times.
#[derive(Clone, Debug)]
pub struct CompiledScript {
    source: String,
    statements: Vec<Statement>,
}

impl CompiledScript {
    /// Parses every line of a construct; any failing line fails the whole
    /// construct.
    ///
    /// `first_line` is the line number of `lines[0]` in `source_name`.
    ///
    /// # Errors
    /// Returns the first failing line's error, located at `source_name:line`.
    pub fn compile<S: AsRef<str>>(
        registry: &ElementRegistry,
        source_name: &str,
        first_line: usize,
        lines: &[S],
    ) -> Result<Self> {
        let (script, errors) = Self::compile_lenient(registry, source_name, first_line, lines);
        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(script),
        }
    }

    /// Parses every line, keeping those that parse and returning the errors
    /// of those that do not.
    #[must_use]
    pub fn compile_lenient<S: AsRef<str>>(
        registry: &ElementRegistry,
        source_name: &str,
        first_line: usize,
        lines: &[S],
    ) -> (Self, Vec<Error>) {
        let mut statements = Vec::new();
        let mut errors = Vec::new();

        for (offset, text) in lines.iter().enumerate() {
            let line = first_line + offset;
            let text = text.as_ref().trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            match registry.force_parse(Category::Effect, text, line) {
                Ok(node) => statements.push(Statement { line, node }),
                Err(err) => {
                    let err = locate(err, source_name, line);
                    tracing::warn!(source = source_name, line, error = %err, "skipping line");
                    errors.push(err);
                }
            }
        }

        tracing::debug!(
            source = source_name,
            statements = statements.len(),
            errors = errors.len(),
            "compiled construct"
        );
        let script = Self {
            source: source_name.to_string(),
            statements,
        };
        (script, errors)
    }

    /// The source name given at compile time.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parsed lines, in order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Returns true if no line parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Executes every statement in order.
    ///
    /// # Errors
    /// Stops at and returns the first execution error, located at the
    /// failing line.
    pub fn run(&self, ctx: &Context) -> Result<()> {
        for statement in &self.statements {
            statement
                .node
                .execute(Some(ctx))
                .map_err(|err| locate(err, &self.source, statement.line))?;
        }
        Ok(())
    }
}

fn locate(mut err: Error, source: &str, line: usize) -> Error {
    let context = err
        .context
        .take()
        .unwrap_or_default()
        .with_source(source)
        .with_line(line);
    err.with_context(context)
}
