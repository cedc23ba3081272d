//! Deterministic I Ching reading engine.
//!
//! A [`Seed`] is expanded by a Park–Miller generator into six coin-toss
//! [`Line`]s, which resolve against the King Wen [`HexagramTable`] into a
//! [`Reading`]: the primary hexagram, the indices of old lines, and the
//! changing hexagram those lines produce. Equal seeds always yield equal
//! readings.

pub mod engine;
pub mod error;
pub mod line;
pub mod meanings;
pub mod reading;
pub mod rng;
pub mod table;

pub use engine::{ReadingEngine, cast_lines, resolve};
pub use error::{HxError, HxResult};
pub use line::{BinaryLines, Bit, LINE_COUNT, Line};
pub use meanings::{Meaning, Meanings};
pub use reading::{Reading, Resolved};
pub use rng::{ParkMiller, Seed, normalize_seed};
pub use table::{Hexagram, HexagramTable};
