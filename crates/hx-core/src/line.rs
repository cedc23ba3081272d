//! Hexagram lines and their yin/yang projection.
//!
//! A cast produces six [`Line`]s, bottom first. Each line carries the sum of
//! three coin tosses (6-9); the [`Bit`] projection drops the old/young
//! distinction and is what the hexagram table is keyed on.

use serde::{Deserialize, Serialize};

use crate::error::{HxError, HxResult};

/// Number of lines in a hexagram.
pub const LINE_COUNT: usize = 6;

/// One cast line, valued by the sum of three coin tosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Line {
    /// Old yin (6): yin, changes to yang.
    OldYin,
    /// Young yang (7): stable yang.
    YoungYang,
    /// Young yin (8): stable yin.
    YoungYin,
    /// Old yang (9): yang, changes to yin.
    OldYang,
}

impl Line {
    /// All line values in toss-sum order.
    pub const ALL: [Self; 4] = [Self::OldYin, Self::YoungYang, Self::YoungYin, Self::OldYang];

    /// Build a line from its toss sum.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            6 => Some(Self::OldYin),
            7 => Some(Self::YoungYang),
            8 => Some(Self::YoungYin),
            9 => Some(Self::OldYang),
            _ => None,
        }
    }

    /// The toss sum (6-9).
    pub fn value(self) -> u8 {
        match self {
            Self::OldYin => 6,
            Self::YoungYang => 7,
            Self::YoungYin => 8,
            Self::OldYang => 9,
        }
    }

    /// Whether this is an old line that flips in the changing hexagram.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// The yin/yang projection used for table lookup.
    pub fn bit(self) -> Bit {
        match self {
            Self::OldYin | Self::YoungYin => Bit::Yin,
            Self::YoungYang | Self::OldYang => Bit::Yang,
        }
    }
}

impl From<Line> for u8 {
    fn from(line: Line) -> Self {
        line.value()
    }
}

impl TryFrom<u8> for Line {
    type Error = HxError;

    fn try_from(value: u8) -> HxResult<Self> {
        Self::from_value(value).ok_or(HxError::InvalidLine(value))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OldYin => write!(f, "old yin"),
            Self::YoungYang => write!(f, "young yang"),
            Self::YoungYin => write!(f, "young yin"),
            Self::OldYang => write!(f, "old yang"),
        }
    }
}

/// A binary line: broken (yin, 0) or solid (yang, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Bit {
    /// Broken line.
    Yin,
    /// Solid line.
    Yang,
}

impl Bit {
    /// The opposite polarity.
    pub fn flipped(self) -> Self {
        match self {
            Self::Yin => Self::Yang,
            Self::Yang => Self::Yin,
        }
    }

    /// `'0'` for yin, `'1'` for yang.
    pub fn as_char(self) -> char {
        match self {
            Self::Yin => '0',
            Self::Yang => '1',
        }
    }
}

impl From<Bit> for u8 {
    fn from(bit: Bit) -> Self {
        match bit {
            Bit::Yin => 0,
            Bit::Yang => 1,
        }
    }
}

impl TryFrom<u8> for Bit {
    type Error = HxError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Yin),
            1 => Ok(Self::Yang),
            other => Err(HxError::InvalidBit(other)),
        }
    }
}

/// Six binary lines, bottom first.
pub type BinaryLines = [Bit; LINE_COUNT];

/// Render binary lines as the `'0'`/`'1'` key the table is indexed by.
pub fn binary_key(bits: &BinaryLines) -> String {
    bits.iter().map(|b| b.as_char()).collect()
}

/// Parse a six-character `'0'`/`'1'` key, bottom first.
pub fn parse_binary_key(key: &str) -> Option<BinaryLines> {
    let mut bits = [Bit::Yin; LINE_COUNT];
    let mut chars = key.chars();
    for slot in &mut bits {
        *slot = match chars.next()? {
            '0' => Bit::Yin,
            '1' => Bit::Yang,
            _ => return None,
        };
    }
    chars.next().is_none().then_some(bits)
}

/// Parse six raw toss sums into lines.
pub fn lines_from_values(values: &[u8]) -> HxResult<[Line; LINE_COUNT]> {
    if values.len() != LINE_COUNT {
        return Err(HxError::WrongLineCount(values.len()));
    }
    let mut lines = [Line::YoungYang; LINE_COUNT];
    for (slot, &value) in lines.iter_mut().zip(values) {
        *slot = Line::try_from(value)?;
    }
    Ok(lines)
}
