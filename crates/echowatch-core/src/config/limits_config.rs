//! Input size limits.

use serde::{Deserialize, Serialize};

/// Limits guarding the quadratic similarity computation.
///
/// The analyzer rejects oversized content before any O(n·m) work runs, so a
/// pathological input cannot stall a worker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum content length in bytes per snapshot. Default: 1 MiB.
    pub max_content_bytes: Option<usize>,
}

impl LimitsConfig {
    pub const DEFAULT_MAX_CONTENT_BYTES: usize = 1024 * 1024;

    /// Returns the effective content ceiling, defaulting to 1 MiB.
    pub fn effective_max_content_bytes(&self) -> usize {
        self.max_content_bytes
            .unwrap_or(Self::DEFAULT_MAX_CONTENT_BYTES)
    }
}
