//! Store configuration.

use crate::entropy::{JitterSource, RandomJitter};
use malachite_topology::DEFAULT_JITTER_BOUND;

/// Configuration for a Malachite store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Maximum angular shift in degrees at mutation degree 1.0
    pub jitter_bound: f64,

    /// Seed for the default jitter source; `None` draws from OS entropy
    pub jitter_seed: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            jitter_bound: DEFAULT_JITTER_BOUND,
            jitter_seed: None,
        }
    }
}

impl StoreConfig {
    /// Create config from environment variables with sensible defaults.
    ///
    /// - `MALACHITE_JITTER_BOUND`: non-negative degrees
    /// - `MALACHITE_JITTER_SEED`: u64 seed for reproducible drift
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("MALACHITE_JITTER_BOUND") {
            match raw.trim().parse::<f64>() {
                Ok(bound) if bound.is_finite() && bound >= 0.0 => config.jitter_bound = bound,
                _ => tracing::warn!(value = %raw, "ignoring invalid MALACHITE_JITTER_BOUND"),
            }
        }

        if let Ok(raw) = std::env::var("MALACHITE_JITTER_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.jitter_seed = Some(seed),
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid MALACHITE_JITTER_SEED"),
            }
        }

        config
    }

    /// Fixed jitter bound; builder style.
    pub fn with_jitter_bound(mut self, bound: f64) -> Self {
        self.jitter_bound = bound.max(0.0);
        self
    }

    /// Reproducible jitter; builder style.
    pub fn with_jitter_seed(mut self, seed: u64) -> Self {
        self.jitter_seed = Some(seed);
        self
    }

    /// The jitter source this config describes.
    pub fn jitter_source(&self) -> Box<dyn JitterSource> {
        match self.jitter_seed {
            Some(seed) => Box::new(RandomJitter::seeded(seed)),
            None => Box::new(RandomJitter::from_entropy()),
        }
    }
}
