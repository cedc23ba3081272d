//! Battery level probes.
//!
//! A probe reports the charge as a fraction in `[0, 1]`, `None` when the
//! machine has no battery, or an error when the read itself fails.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{EntropyError, EntropyResult};

/// Source of a battery charge fraction.
pub trait BatteryProbe: Send + Sync {
    /// Current charge in `[0, 1]`, or `None` if there is no battery.
    fn level(&self) -> EntropyResult<Option<f64>>;
}

/// A probe that always reports the same value.
///
/// Finite values are clamped into `[0, 1]`; NaN and infinities are reported
/// as unavailable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedBattery(pub Option<f64>);

impl BatteryProbe for FixedBattery {
    fn level(&self) -> EntropyResult<Option<f64>> {
        match self.0 {
            Some(level) if !level.is_finite() => Err(EntropyError::Unavailable(format!(
                "battery level {level} is not a number"
            ))),
            level => Ok(level.map(|l| l.clamp(0.0, 1.0))),
        }
    }
}

/// Reads `capacity` from the first `Battery` entry under a power-supply
/// directory (`/sys/class/power_supply` on Linux).
#[derive(Debug, Clone)]
pub struct SysfsBattery {
    root: PathBuf,
}

impl SysfsBattery {
    /// Probe the given power-supply directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory being scanned.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BatteryProbe for SysfsBattery {
    fn level(&self) -> EntropyResult<Option<f64>> {
        let entries = match std::fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut supplies: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .collect();
        supplies.sort();

        for supply in supplies {
            let kind = match std::fs::read_to_string(supply.join("type")) {
                Ok(kind) => kind,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };
            if kind.trim() != "Battery" {
                continue;
            }

            let raw = std::fs::read_to_string(supply.join("capacity"))?;
            let percent: f64 = raw.trim().parse().map_err(|_| {
                EntropyError::Unavailable(format!(
                    "unreadable capacity {:?} in {}",
                    raw.trim(),
                    supply.display()
                ))
            })?;
            if !percent.is_finite() {
                return Err(EntropyError::Unavailable(format!(
                    "capacity {percent} in {} is not a finite number",
                    supply.display()
                )));
            }
            return Ok(Some((percent / 100.0).clamp(0.0, 1.0)));
        }

        Ok(None)
    }
}
