//! The immutable result of a cast.

use serde::{Deserialize, Serialize};

use crate::error::HxError;
use crate::line::{BinaryLines, LINE_COUNT, Line};
use crate::table::HEXAGRAM_COUNT;

/// A hexagram resolved against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolved {
    /// King Wen number (1-64).
    pub number: u8,
    /// Binary lines, bottom first.
    pub lines: BinaryLines,
}

/// A complete reading: the cast lines, the primary hexagram, and the
/// changing hexagram when any line is old.
///
/// `changing` is present exactly when `changing_line_indices` is non-empty.
/// Deserialization checks this and the other cross-field invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawReading")]
pub struct Reading {
    lines: [Line; LINE_COUNT],
    primary: Resolved,
    changing_line_indices: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    changing: Option<Resolved>,
}

impl Reading {
    pub(crate) fn new(
        lines: [Line; LINE_COUNT],
        primary: Resolved,
        changing_line_indices: Vec<usize>,
        changing: Option<Resolved>,
    ) -> Self {
        debug_assert_eq!(changing_line_indices.is_empty(), changing.is_none());
        Self {
            lines,
            primary,
            changing_line_indices,
            changing,
        }
    }

    /// The cast lines (6-9), bottom first.
    pub fn lines(&self) -> &[Line; LINE_COUNT] {
        &self.lines
    }

    /// The primary hexagram.
    pub fn primary(&self) -> Resolved {
        self.primary
    }

    /// Number of the primary hexagram.
    pub fn primary_number(&self) -> u8 {
        self.primary.number
    }

    /// Binary lines of the primary hexagram.
    pub fn primary_lines(&self) -> &BinaryLines {
        &self.primary.lines
    }

    /// Ascending indices of old (6 or 9) lines.
    pub fn changing_indices(&self) -> &[usize] {
        &self.changing_line_indices
    }

    /// Whether any line changes.
    pub fn has_changes(&self) -> bool {
        self.changing.is_some()
    }

    /// The changing hexagram, if any line is old.
    pub fn changing(&self) -> Option<Resolved> {
        self.changing
    }

    /// Number of the changing hexagram.
    pub fn changing_number(&self) -> Option<u8> {
        self.changing.map(|c| c.number)
    }

    /// Binary lines of the changing hexagram.
    pub fn changing_lines(&self) -> Option<&BinaryLines> {
        self.changing.as_ref().map(|c| &c.lines)
    }
}

/// Wire shape of a [`Reading`] before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReading {
    lines: [Line; LINE_COUNT],
    primary: Resolved,
    changing_line_indices: Vec<usize>,
    #[serde(default)]
    changing: Option<Resolved>,
}

fn inconsistent(msg: impl Into<String>) -> HxError {
    HxError::InconsistentReading(msg.into())
}

fn check_number(number: u8) -> Result<(), HxError> {
    if (1..=HEXAGRAM_COUNT as u8).contains(&number) {
        Ok(())
    } else {
        Err(HxError::NumberOutOfRange(number))
    }
}

impl TryFrom<RawReading> for Reading {
    type Error = HxError;

    fn try_from(raw: RawReading) -> Result<Self, Self::Error> {
        let RawReading {
            lines,
            primary,
            changing_line_indices,
            changing,
        } = raw;

        check_number(primary.number)?;
        if primary.lines != lines.map(Line::bit) {
            return Err(inconsistent("primary lines do not match the cast"));
        }

        let expected: Vec<usize> = (0..LINE_COUNT).filter(|&i| lines[i].is_changing()).collect();
        if changing_line_indices != expected {
            return Err(inconsistent(format!(
                "changing line indices {changing_line_indices:?}, cast has old lines at {expected:?}"
            )));
        }

        match (&changing, expected.is_empty()) {
            (None, true) => {}
            (Some(_), true) => return Err(inconsistent("changing hexagram without old lines")),
            (None, false) => return Err(inconsistent("old lines without a changing hexagram")),
            (Some(changed), false) => {
                check_number(changed.number)?;
                let mut flipped = primary.lines;
                for &i in &expected {
                    flipped[i] = flipped[i].flipped();
                }
                if changed.lines != flipped {
                    return Err(inconsistent(
                        "changing lines are not the primary with old lines flipped",
                    ));
                }
            }
        }

        Ok(Self::new(lines, primary, changing_line_indices, changing))
    }
}
