//! Error types for the Quill system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::{Category, ValueType};

/// The main error type for Quill operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Pushes a frame onto the error's context, creating one if needed.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Creates a malformed pattern error.
    #[must_use]
    pub fn pattern_syntax(pattern: &str, position: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PatternSyntax {
            pattern: pattern.to_string(),
            position,
            message: message.into(),
        })
    }

    /// Creates a "no factory matched" error.
    #[must_use]
    pub fn parse(line: usize, category: Category, text: &str) -> Self {
        Self::new(ErrorKind::Parse {
            line,
            category,
            text: text.to_string(),
        })
    }

    /// Creates an error for a mutation on a node lacking the facet.
    #[must_use]
    pub fn unsupported_capability(capability: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedCapability {
            capability: capability.into(),
            target: target.into(),
        })
    }

    /// Creates an error for an operation reserved for a host override.
    #[must_use]
    pub fn unimplemented(operation: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnimplementedOperation(operation.into()))
    }

    /// Creates an error for a role absent from the execution context.
    #[must_use]
    pub fn missing_role(role: impl Into<String>) -> Self {
        Self::new(ErrorKind::Evaluation(EvaluationError::MissingRole(
            role.into(),
        )))
    }

    /// Creates a runtime type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: ValueType, actual: ValueType) -> Self {
        Self::new(ErrorKind::Evaluation(EvaluationError::TypeMismatch {
            expected,
            actual,
        }))
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Evaluation(EvaluationError::InvalidArgument(
            message.into(),
        )))
    }

    /// Creates a nesting limit error.
    #[must_use]
    pub fn nesting_too_deep(limit: usize) -> Self {
        Self::new(ErrorKind::NestingTooDeep { limit })
    }

    /// Returns true if this error was raised while executing a node.
    #[must_use]
    pub const fn is_evaluation(&self) -> bool {
        matches!(self.kind, ErrorKind::Evaluation(_))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A pattern specification could not be compiled.
    #[error("pattern syntax error at {position} in `{pattern}`: {message}")]
    PatternSyntax {
        /// The pattern specification, without surrounding whitespace.
        pattern: String,
        /// Character offset of the problem.
        position: usize,
        /// Description of the problem.
        message: String,
    },

    /// No registered factory matched a line for the required category.
    #[error("line {line}: cannot understand `{text}` as {category}")]
    Parse {
        /// Line number (1-indexed).
        line: usize,
        /// The category that was being parsed.
        category: Category,
        /// The text that failed to parse.
        text: String,
    },

    /// A mutation was bound to a node that does not declare the facet.
    #[error("{target} cannot be {capability}")]
    UnsupportedCapability {
        /// The missing capability.
        capability: String,
        /// Description of the target node.
        target: String,
    },

    /// Behavior reserved for a host-supplied override was invoked without one.
    #[error("cannot execute {0} without a host implementation")]
    UnimplementedOperation(String),

    /// Runtime failure inside `execute`.
    #[error("evaluation error: {0}")]
    Evaluation(EvaluationError),

    /// Sub-expression nesting exceeded the configured limit.
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
    },
}

/// Runtime failures raised while executing a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The execution context has no entity bound to a required role.
    MissingRole(String),
    /// A child produced a value of the wrong type.
    TypeMismatch {
        /// The expected type.
        expected: ValueType,
        /// The actual type encountered.
        actual: ValueType,
    },
    /// An argument is outside the operation's domain.
    InvalidArgument(String),
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRole(role) => write!(f, "no {role} in this context"),
            Self::TypeMismatch { expected, actual } => {
                write!(f, "type mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Script file or construct name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Stack of constructs being parsed or executed.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            line: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
