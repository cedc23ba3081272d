//! Configuration for the entropy source.

use std::path::PathBuf;
use std::time::Duration;

/// Default pause before a seed is returned.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(150);

/// Default location of Linux power-supply entries.
pub const DEFAULT_SYSFS_ROOT: &str = "/sys/class/power_supply";

/// Configuration for an [`EntropySource`](crate::EntropySource).
#[derive(Debug, Clone)]
pub struct EntropyConfig {
    /// Pause before returning a seed, for perceptible feedback.
    pub latency: Duration,
    /// Directory scanned for battery entries.
    pub sysfs_root: PathBuf,
}

impl Default for EntropyConfig {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            sysfs_root: PathBuf::from(DEFAULT_SYSFS_ROOT),
        }
    }
}

impl EntropyConfig {
    /// Set the pause before a seed is returned.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Return seeds immediately.
    pub fn without_latency(self) -> Self {
        self.with_latency(Duration::ZERO)
    }

    /// Scan a different power-supply directory.
    pub fn with_sysfs_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.sysfs_root = root.into();
        self
    }
}
