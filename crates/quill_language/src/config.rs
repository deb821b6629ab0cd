//! Parser configuration.

/// Options that shape how the registry builds nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserConfig {
    /// Evaluate foldable nodes with constant children while parsing.
    pub fold_constants: bool,
    /// Maximum placeholder nesting depth before parsing gives up.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserConfig {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Creates the default configuration: folding on, depth limit 64.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fold_constants: true,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// A configuration that leaves every node unevaluated until execution.
    #[must_use]
    pub const fn without_folding() -> Self {
        Self {
            fold_constants: false,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the folding switch.
    #[must_use]
    pub const fn with_folding(mut self, fold: bool) -> Self {
        self.fold_constants = fold;
        self
    }

    /// Sets the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
