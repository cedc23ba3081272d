//! Seed generation from battery level and wall-clock time.
//!
//! `seed = floor(|battery * 1000 + millis|)`. This is a casual, guessable
//! seed for a user-facing draw and nothing more; it must not be used where
//! unpredictability matters.

use hx_core::Seed;

use crate::battery::{BatteryProbe, SysfsBattery};
use crate::clock::{Clock, SystemClock};
use crate::config::EntropyConfig;
use crate::error::EntropyResult;

/// Battery fraction used when the machine reports no battery.
pub const FALLBACK_BATTERY_LEVEL: f64 = 0.0;

/// Combine a battery fraction and a timestamp into a seed.
pub fn seed_from(battery_level: f64, millis: i64) -> Seed {
    let chaos = (battery_level * 1000.0 + millis as f64).abs();
    Seed(chaos.floor() as i64)
}

/// Produces seeds from a battery probe and a clock.
#[derive(Debug, Clone)]
pub struct EntropySource<B = SysfsBattery, C = SystemClock> {
    battery: B,
    clock: C,
    config: EntropyConfig,
}

impl EntropySource {
    /// A source reading the system battery and wall clock.
    pub fn new(config: EntropyConfig) -> Self {
        let battery = SysfsBattery::new(config.sysfs_root.clone());
        Self::with_parts(battery, SystemClock, config)
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new(EntropyConfig::default())
    }
}

impl<B: BatteryProbe, C: Clock> EntropySource<B, C> {
    /// A source from explicit probes.
    pub fn with_parts(battery: B, clock: C, config: EntropyConfig) -> Self {
        Self {
            battery,
            clock,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &EntropyConfig {
        &self.config
    }

    /// Read the battery and clock, pause for the configured latency, and
    /// return a seed.
    ///
    /// Dropping the future abandons the draw; nothing needs releasing.
    pub async fn get_seed(&self) -> EntropyResult<Seed> {
        let battery = match self.battery.level()? {
            Some(level) => level,
            None => {
                tracing::debug!("no battery reported, using fallback level");
                FALLBACK_BATTERY_LEVEL
            }
        };
        let millis = self.clock.now_millis()?;

        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }

        let seed = seed_from(battery, millis);
        tracing::debug!(battery, millis, %seed, "generated seed");
        Ok(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battery::FixedBattery;
    use crate::clock::FixedClock;
    use crate::error::EntropyError;
    use std::time::Duration;

    struct BrokenBattery;

    impl BatteryProbe for BrokenBattery {
        fn level(&self) -> EntropyResult<Option<f64>> {
            Err(EntropyError::Unavailable("probe offline".into()))
        }
    }

    fn fixed(level: Option<f64>, millis: i64) -> EntropySource<FixedBattery, FixedClock> {
        EntropySource::with_parts(
            FixedBattery(level),
            FixedClock(millis),
            EntropyConfig::default().without_latency(),
        )
    }

    #[test]
    fn formula() {
        assert_eq!(seed_from(0.5, 1_700_000_000_000), Seed(1_700_000_000_500));
        assert_eq!(seed_from(0.1234, 10), Seed(133));
        assert_eq!(seed_from(0.0, -2500), Seed(2500));
        assert_eq!(seed_from(1.0, 0), Seed(1000));
    }

    #[tokio::test]
    async fn seed_from_fixed_parts() {
        let seed = fixed(Some(0.75), 1_700_000_000_123).get_seed().await.unwrap();
        assert_eq!(seed, Seed(1_700_000_000_873));
    }

    #[tokio::test]
    async fn missing_battery_falls_back_to_zero() {
        let seed = fixed(None, 1_700_000_000_123).get_seed().await.unwrap();
        assert_eq!(seed, Seed(1_700_000_000_123));
    }

    #[tokio::test]
    async fn probe_failure_is_retryable_error() {
        let source = EntropySource::with_parts(
            BrokenBattery,
            FixedClock(0),
            EntropyConfig::default().without_latency(),
        );
        let err = source.get_seed().await.unwrap_err();
        assert!(err.is_retryable());
        assert!(err.to_string().contains("probe offline"));
    }

    #[tokio::test]
    async fn nan_battery_draws_no_seed() {
        for millis in [1_700_000_000_000, 1_800_000_000_000] {
            let err = fixed(Some(f64::NAN), millis).get_seed().await.unwrap_err();
            assert!(matches!(err, EntropyError::Unavailable(_)));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn waits_for_configured_latency() {
        let source = EntropySource::with_parts(
            FixedBattery(Some(0.5)),
            FixedClock(0),
            EntropyConfig::default(),
        );
        let start = tokio::time::Instant::now();
        source.get_seed().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_draw_returns_nothing() {
        let source = EntropySource::with_parts(
            FixedBattery(Some(0.5)),
            FixedClock(0),
            EntropyConfig::default().with_latency(Duration::from_secs(5)),
        );
        let result = tokio::time::timeout(Duration::from_millis(10), source.get_seed()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn seeds_feed_the_engine() {
        let seed = fixed(Some(0.5), 1_700_000_000_000).get_seed().await.unwrap();
        let reading = hx_core::resolve(seed).unwrap();
        assert!((1..=64).contains(&reading.primary_number()));
    }
}
