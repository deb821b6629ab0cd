//! Element registry.
//!
//! Holds, per grammar [`Category`], an ordered list of factories. Parsing a
//! line tries each factory of the category in registration order; the first
//! one whose patterns match (and whose result type the hint accepts) wins.
//! Factories declare their result type up front, so a hinted parse never
//! builds a node it would then reject. Placeholder captures are parsed recursively through
//! [`ElementRegistry::parse_hinted`], so an element never needs to know how
//! its sub-expressions are spelled.

use std::collections::HashMap;

use quill_foundation::{Category, Error, Result, Value, ValueType};
use quill_pattern::{CaptureKind, Match, Pattern, PatternCompiler, PatternMatcher};

use crate::config::ParserConfig;
use crate::host::HostHandle;
use crate::kind::NodeKind;
use crate::node::Node;

/// Builds a node from a successful match.
pub type BuildFn = fn(&FactoryInput<'_>) -> Result<Node>;

/// A named element: its surface forms and how to build it.
#[derive(Debug)]
pub struct Factory {
    /// Name used in logs and error frames
    pub name: &'static str,
    /// Declared result type of every node the factory builds
    pub returns: ValueType,
    /// Synonymous surface forms, tried in order
    pub patterns: Vec<Pattern>,
    /// Node builder
    pub build: BuildFn,
}

impl Factory {
    /// Compiles a factory's patterns.
    ///
    /// # Errors
    /// Returns the first pattern syntax error.
    pub fn new(
        name: &'static str,
        returns: ValueType,
        specs: &[&str],
        build: BuildFn,
    ) -> Result<Self> {
        Ok(Self {
            name,
            returns,
            patterns: PatternCompiler::compile_all(specs)?,
            build,
        })
    }
}

/// Everything a factory sees when building a node.
pub struct FactoryInput<'r> {
    registry: &'r ElementRegistry,
    matched: Match,
    line: usize,
    depth: usize,
}

impl FactoryInput<'_> {
    /// Which surface form matched.
    #[must_use]
    pub const fn pattern_index(&self) -> usize {
        self.matched.pattern_index
    }

    /// The raw match.
    #[must_use]
    pub const fn matched(&self) -> &Match {
        &self.matched
    }

    /// The source line.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The captured text in a slot, if present.
    #[must_use]
    pub fn text(&self, slot: usize) -> Option<&str> {
        self.matched.text(slot)
    }

    /// The registry's host.
    #[must_use]
    pub fn host(&self) -> HostHandle {
        self.registry.host.clone()
    }

    /// Parses a required placeholder capture into a child node.
    ///
    /// # Errors
    /// Fails if the slot is empty or the captured text does not parse as
    /// the placeholder's type.
    pub fn child(&self, slot: usize) -> Result<Node> {
        self.optional_child(slot)?.ok_or_else(|| {
            Error::invalid_argument(format!("placeholder {slot} captured nothing"))
        })
    }

    /// Parses an optional placeholder capture; `None` when skipped.
    ///
    /// # Errors
    /// Fails if the captured text does not parse as the placeholder's type.
    pub fn optional_child(&self, slot: usize) -> Result<Option<Node>> {
        let Some(capture) = self.matched.get(slot) else {
            return Ok(None);
        };
        let hint = match capture.kind {
            CaptureKind::Placeholder(hint) => hint,
            CaptureKind::Regex => ValueType::Any,
        };
        self.registry
            .parse_hinted_at(hint, &capture.text, self.line, self.depth + 1)
            .map(Some)
    }

    /// Builds a node of `kind`, folding per the registry's configuration.
    ///
    /// # Errors
    /// Returns the evaluation error if folding fails.
    pub fn node(&self, kind: NodeKind, children: Vec<Node>) -> Result<Node> {
        Node::new(kind, children, self.line, self.registry.config.fold_constants)
    }

    /// Builds a constant node.
    #[must_use]
    pub fn constant(&self, value: Value) -> Node {
        Node::constant(value, self.line)
    }
}

/// Ordered factories per category, plus the host and parser options every
/// built node shares.
#[derive(Debug)]
pub struct ElementRegistry {
    factories: HashMap<Category, Vec<Factory>>,
    host: HostHandle,
    config: ParserConfig,
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new(HostHandle::default(), ParserConfig::default())
    }
}

impl ElementRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new(host: HostHandle, config: ParserConfig) -> Self {
        Self {
            factories: HashMap::new(),
            host,
            config,
        }
    }

    /// Creates a registry holding every built-in element.
    ///
    /// # Errors
    /// Fails only if a built-in pattern is malformed.
    pub fn standard(host: HostHandle) -> Result<Self> {
        Self::standard_with_config(host, ParserConfig::default())
    }

    /// Like [`ElementRegistry::standard`] with explicit parser options.
    ///
    /// # Errors
    /// Fails only if a built-in pattern is malformed.
    pub fn standard_with_config(host: HostHandle, config: ParserConfig) -> Result<Self> {
        let mut registry = Self::new(host, config);
        crate::elements::register_all(&mut registry)?;
        Ok(registry)
    }

    /// The parser options.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Appends a factory to a category.
    ///
    /// Earlier registrations win when several factories match the same text.
    pub fn register(&mut self, category: Category, factory: Factory) {
        tracing::debug!(
            category = %category,
            factory = factory.name,
            returns = %factory.returns,
            patterns = factory.patterns.len(),
            "registered factory"
        );
        self.factories.entry(category).or_default().push(factory);
    }

    /// Compiles and appends a factory in one step.
    ///
    /// # Errors
    /// Returns the first pattern syntax error.
    pub fn register_element(
        &mut self,
        category: Category,
        name: &'static str,
        returns: ValueType,
        specs: &[&str],
        build: BuildFn,
    ) -> Result<()> {
        self.register(category, Factory::new(name, returns, specs, build)?);
        Ok(())
    }

    /// The factories of a category, in trial order.
    #[must_use]
    pub fn factories(&self, category: Category) -> &[Factory] {
        self.factories.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Parses text in one category.
    ///
    /// Returns `Ok(None)` when no factory matches.
    ///
    /// # Errors
    /// Fails when a matching factory cannot build its node, for example
    /// because a placeholder's text does not parse.
    pub fn parse(&self, category: Category, text: &str, line: usize) -> Result<Option<Node>> {
        self.parse_at(category, text, line, 0, None)
    }

    /// Parses text in one category, failing when nothing matches.
    ///
    /// # Errors
    /// Returns a parse error naming the line and category, or the error of
    /// the matching factory.
    pub fn force_parse(&self, category: Category, text: &str, line: usize) -> Result<Node> {
        self.parse(category, text, line)?
            .ok_or_else(|| Error::parse(line, category, text))
    }

    /// Parses text as an expression of the hinted type.
    ///
    /// Tries the hint's categories in order and returns the first node whose
    /// declared type the hint accepts.
    ///
    /// # Errors
    /// Returns a parse error when no category yields an acceptable node.
    pub fn parse_hinted(&self, hint: ValueType, text: &str, line: usize) -> Result<Node> {
        self.parse_hinted_at(hint, text, line, 0)
    }

    fn parse_hinted_at(&self, hint: ValueType, text: &str, line: usize, depth: usize) -> Result<Node> {
        if depth > self.config.max_depth {
            return Err(Error::nesting_too_deep(self.config.max_depth));
        }
        let categories = hint.categories();
        for &category in categories {
            if let Some(node) = self.parse_at(category, text, line, depth, Some(hint))? {
                return Ok(node);
            }
        }
        let category = categories.first().copied().unwrap_or(Category::Expression);
        Err(Error::parse(line, category, text))
    }

    #[tracing::instrument(level = "trace", skip(self, accept))]
    fn parse_at(
        &self,
        category: Category,
        text: &str,
        line: usize,
        depth: usize,
        accept: Option<ValueType>,
    ) -> Result<Option<Node>> {
        for factory in self.factories(category) {
            if let Some(hint) = accept {
                if !hint.accepts(factory.returns) {
                    continue;
                }
            }
            let Some(matched) = PatternMatcher::first_match(&factory.patterns, text) else {
                continue;
            };
            let input = FactoryInput {
                registry: self,
                matched,
                line,
                depth,
            };
            let node = (factory.build)(&input)
                .map_err(|e| e.with_frame(format!("{} (line {line})", factory.name)))?;

            if let Some(hint) = accept {
                if !hint.accepts(node.value_type()) {
                    tracing::trace!(
                        factory = factory.name,
                        expected = %hint,
                        actual = %node.value_type(),
                        "skipping factory with unacceptable type"
                    );
                    continue;
                }
            }
            tracing::debug!(
                category = %category,
                factory = factory.name,
                pattern = input.pattern_index(),
                line,
                folded = node.is_folded(),
                "parsed"
            );
            return Ok(Some(node));
        }
        Ok(None)
    }
}
