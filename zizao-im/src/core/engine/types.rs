//! Type definitions for the composer

use zizao_engine::FALLBACK_LIMIT;

/// Configuration for the composer
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of candidates gathered by the prefix-fallback search
    pub fallback_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fallback_limit: FALLBACK_LIMIT,
        }
    }
}
