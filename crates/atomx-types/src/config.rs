use serde::{Deserialize, Serialize};

/// Default maximum nesting depth.
///
/// Each `(` level costs three parser frames; this bound keeps the deepest
/// accepted input well inside a 2 MiB thread stack in debug builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Evaluation options.
///
/// Every field has a default, so a host can deserialize a partial JSON
/// object such as `{"reject_trailing_tokens": true}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalOptions {
    /// Maximum nesting of `!` and `(` before evaluation fails with E600.
    pub max_depth: usize,
    /// Fail with E105 instead of ignoring tokens left over after the
    /// top-level expression, such as the stray `)` in `(a | b) & c)`.
    pub reject_trailing_tokens: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            reject_trailing_tokens: false,
        }
    }
}

impl EvalOptions {
    /// Strict options: trailing tokens are an error.
    pub fn strict() -> Self {
        Self {
            reject_trailing_tokens: true,
            ..Self::default()
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
