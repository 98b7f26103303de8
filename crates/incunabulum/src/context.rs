//! Evaluation context configuration

/// Default bound on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Configuration for parsing and evaluation.
///
/// Passed through evaluation calls; controls limits that keep malformed or
/// pathological input from exhausting the native stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalContext {
    /// Maximum expression nesting (parentheses and chained verbs)
    pub max_depth: usize,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}
