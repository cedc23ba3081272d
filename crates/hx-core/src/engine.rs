//! Seed-to-reading resolution.
//!
//! The engine expands a [`Seed`] into six lines with the Park–Miller
//! generator (three tosses per line, bottom line first, 18 draws in total),
//! then resolves the primary and changing hexagrams against a table. It owns
//! no mutable state and can be shared freely across threads.

use crate::error::HxResult;
use crate::line::{Bit, LINE_COUNT, Line};
use crate::reading::{Reading, Resolved};
use crate::rng::{ParkMiller, Seed, normalize_seed};
use crate::table::HexagramTable;

/// Coin tosses per line.
pub const TOSSES_PER_LINE: usize = 3;

/// Resolves seeds and line casts into readings.
#[derive(Debug, Clone, Copy)]
pub struct ReadingEngine<'t> {
    table: &'t HexagramTable,
}

impl ReadingEngine<'static> {
    /// An engine over the standard table, self-checked.
    pub fn standard() -> HxResult<Self> {
        Self::new(HexagramTable::standard()?)
    }
}

impl<'t> ReadingEngine<'t> {
    /// Create an engine, failing if the table does not cover all 64 patterns.
    pub fn new(table: &'t HexagramTable) -> HxResult<Self> {
        table.verify_complete()?;
        Ok(Self { table })
    }

    /// Create an engine without the completeness check.
    ///
    /// Lookups against a partial table fail per call with
    /// [`HxError::TableResolution`](crate::HxError::TableResolution).
    pub fn unchecked(table: &'t HexagramTable) -> Self {
        Self { table }
    }

    /// The table this engine resolves against.
    pub fn table(&self) -> &'t HexagramTable {
        self.table
    }

    /// Cast six lines from a seed.
    pub fn cast_lines(&self, seed: Seed) -> [Line; LINE_COUNT] {
        cast_lines(seed)
    }

    /// Resolve a seed into a reading.
    pub fn resolve(&self, seed: Seed) -> HxResult<Reading> {
        let lines = cast_lines(seed);
        let reading = self.read_lines(lines)?;
        tracing::debug!(
            %seed,
            state = normalize_seed(seed),
            primary = reading.primary_number(),
            changing = ?reading.changing_number(),
            "resolved reading"
        );
        Ok(reading)
    }

    /// Resolve already-cast lines into a reading.
    pub fn read_lines(&self, lines: [Line; LINE_COUNT]) -> HxResult<Reading> {
        let primary_lines = lines.map(Line::bit);
        let primary = Resolved {
            number: self.table.number_for(&primary_lines)?,
            lines: primary_lines,
        };

        let changing_indices: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.is_changing())
            .map(|(i, _)| i)
            .collect();

        let changing = if changing_indices.is_empty() {
            None
        } else {
            let changed_lines = flip(&primary_lines, &changing_indices);
            Some(Resolved {
                number: self.table.number_for(&changed_lines)?,
                lines: changed_lines,
            })
        };

        Ok(Reading::new(lines, primary, changing_indices, changing))
    }
}

/// Cast six lines from a seed: each line sums three tosses of 2 or 3.
pub fn cast_lines(seed: Seed) -> [Line; LINE_COUNT] {
    let mut rng = ParkMiller::from_seed(seed);
    std::array::from_fn(|_| {
        let sum: u8 = (0..TOSSES_PER_LINE).map(|_| rng.toss()).sum();
        match sum {
            6 => Line::OldYin,
            7 => Line::YoungYang,
            8 => Line::YoungYin,
            _ => Line::OldYang,
        }
    })
}

/// Resolve a seed against the standard table.
pub fn resolve(seed: Seed) -> HxResult<Reading> {
    ReadingEngine::standard()?.resolve(seed)
}

fn flip(lines: &[Bit; LINE_COUNT], indices: &[usize]) -> [Bit; LINE_COUNT] {
    let mut out = *lines;
    for &i in indices {
        out[i] = out[i].flipped();
    }
    out
}
