//! Seed source for hexagram readings.
//!
//! Reads the battery charge and the wall clock once per draw and folds them
//! into a [`Seed`](hx_core::Seed) for the reading engine. A machine without a
//! battery contributes a fixed level of zero; a failed read is an
//! [`EntropyError`], which callers should treat as retryable.

pub mod battery;
pub mod clock;
pub mod config;
pub mod error;
pub mod source;

pub use battery::{BatteryProbe, FixedBattery, SysfsBattery};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::EntropyConfig;
pub use error::{EntropyError, EntropyResult};
pub use source::{EntropySource, seed_from};
