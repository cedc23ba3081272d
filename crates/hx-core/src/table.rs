//! The hexagram reference table.
//!
//! Maps each of the 64 six-line patterns (bottom line first) to its King Wen
//! number and back. The standard table is built once per process and shared
//! read-only; custom tables can be loaded from JSON in the same shape.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{HxError, HxResult};
use crate::line::{BinaryLines, Bit, LINE_COUNT, binary_key, parse_binary_key};

/// Number of hexagrams in a complete table.
pub const HEXAGRAM_COUNT: usize = 64;

/// One entry of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hexagram {
    /// King Wen number (1-64).
    pub number: u8,
    /// Binary lines, bottom first.
    pub lines: BinaryLines,
    /// Romanized name.
    #[serde(default)]
    pub name: String,
    /// English title.
    #[serde(default)]
    pub english: String,
}

impl Hexagram {
    /// The `'0'`/`'1'` key of this hexagram's lines.
    pub fn key(&self) -> String {
        binary_key(&self.lines)
    }
}

/// King Wen sequence: number, lines (bottom first), name, English title.
const KING_WEN: [(u8, &str, &str, &str); HEXAGRAM_COUNT] = [
    (1, "111111", "Qian", "The Creative"),
    (2, "000000", "Kun", "The Receptive"),
    (3, "100010", "Zhun", "Difficulty at the Beginning"),
    (4, "010001", "Meng", "Youthful Folly"),
    (5, "111010", "Xu", "Waiting"),
    (6, "010111", "Song", "Conflict"),
    (7, "010000", "Shi", "The Army"),
    (8, "000010", "Bi", "Holding Together"),
    (9, "111011", "Xiao Chu", "Small Taming"),
    (10, "110111", "Lu", "Treading"),
    (11, "111000", "Tai", "Peace"),
    (12, "000111", "Pi", "Standstill"),
    (13, "101111", "Tong Ren", "Fellowship"),
    (14, "111101", "Da You", "Great Possession"),
    (15, "001000", "Qian", "Modesty"),
    (16, "000100", "Yu", "Enthusiasm"),
    (17, "100110", "Sui", "Following"),
    (18, "011001", "Gu", "Work on the Decayed"),
    (19, "110000", "Lin", "Approach"),
    (20, "000011", "Guan", "Contemplation"),
    (21, "100101", "Shi He", "Biting Through"),
    (22, "101001", "Bi", "Grace"),
    (23, "000001", "Bo", "Splitting Apart"),
    (24, "100000", "Fu", "Return"),
    (25, "100111", "Wu Wang", "Innocence"),
    (26, "111001", "Da Chu", "Great Taming"),
    (27, "100001", "Yi", "Nourishment"),
    (28, "011110", "Da Guo", "Great Exceeding"),
    (29, "010010", "Kan", "The Abysmal"),
    (30, "101101", "Li", "The Clinging"),
    (31, "001110", "Xian", "Influence"),
    (32, "011100", "Heng", "Duration"),
    (33, "001111", "Dun", "Retreat"),
    (34, "111100", "Da Zhuang", "Great Power"),
    (35, "000101", "Jin", "Progress"),
    (36, "101000", "Ming Yi", "Darkening of the Light"),
    (37, "101011", "Jia Ren", "The Family"),
    (38, "110101", "Kui", "Opposition"),
    (39, "001010", "Jian", "Obstruction"),
    (40, "010100", "Xie", "Deliverance"),
    (41, "110001", "Sun", "Decrease"),
    (42, "100011", "Yi", "Increase"),
    (43, "111110", "Guai", "Breakthrough"),
    (44, "011111", "Gou", "Coming to Meet"),
    (45, "000110", "Cui", "Gathering Together"),
    (46, "011000", "Sheng", "Pushing Upward"),
    (47, "010110", "Kun", "Oppression"),
    (48, "011010", "Jing", "The Well"),
    (49, "101110", "Ge", "Revolution"),
    (50, "011101", "Ding", "The Cauldron"),
    (51, "100100", "Zhen", "The Arousing"),
    (52, "001001", "Gen", "Keeping Still"),
    (53, "001011", "Jian", "Development"),
    (54, "110100", "Gui Mei", "The Marrying Maiden"),
    (55, "101100", "Feng", "Abundance"),
    (56, "001101", "Lu", "The Wanderer"),
    (57, "011011", "Xun", "The Gentle"),
    (58, "110110", "Dui", "The Joyous"),
    (59, "010011", "Huan", "Dispersion"),
    (60, "110010", "Jie", "Limitation"),
    (61, "110011", "Zhong Fu", "Inner Truth"),
    (62, "001100", "Xiao Guo", "Small Exceeding"),
    (63, "101010", "Ji Ji", "After Completion"),
    (64, "010101", "Wei Ji", "Before Completion"),
];

static STANDARD: LazyLock<HxResult<HexagramTable>> = LazyLock::new(|| {
    let entries = KING_WEN
        .iter()
        .map(|&(number, key, name, english)| {
            let lines = parse_binary_key(key).ok_or_else(|| HxError::TableResolution {
                key: key.to_string(),
            })?;
            Ok(Hexagram {
                number,
                lines,
                name: name.to_string(),
                english: english.to_string(),
            })
        })
        .collect::<HxResult<Vec<_>>>()?;
    let table = HexagramTable::from_entries(entries)?;
    tracing::debug!(entries = table.len(), "built standard hexagram table");
    Ok(table)
});

/// Bidirectional lookup between line patterns and hexagram numbers.
#[derive(Debug, Clone)]
pub struct HexagramTable {
    by_number: BTreeMap<u8, Hexagram>,
    by_lines: HashMap<BinaryLines, u8>,
}

impl HexagramTable {
    /// The process-wide King Wen table.
    pub fn standard() -> HxResult<&'static Self> {
        STANDARD.as_ref().map_err(Clone::clone)
    }

    /// Build a table from entries.
    ///
    /// Rejects out-of-range numbers and repeated numbers or patterns. A table
    /// with fewer than 64 entries is accepted; see [`Self::verify_complete`].
    pub fn from_entries(entries: impl IntoIterator<Item = Hexagram>) -> HxResult<Self> {
        let mut by_number = BTreeMap::new();
        let mut by_lines = HashMap::new();

        for entry in entries {
            if !(1..=HEXAGRAM_COUNT as u8).contains(&entry.number) {
                return Err(HxError::NumberOutOfRange(entry.number));
            }
            if by_number.contains_key(&entry.number) {
                return Err(HxError::DuplicateNumber(entry.number));
            }
            if let Some(&first) = by_lines.get(&entry.lines) {
                return Err(HxError::DuplicatePattern {
                    key: entry.key(),
                    first,
                    second: entry.number,
                });
            }
            by_lines.insert(entry.lines, entry.number);
            by_number.insert(entry.number, entry);
        }

        Ok(Self {
            by_number,
            by_lines,
        })
    }

    /// Parse a JSON array of `{ number, lines, name?, english? }` entries.
    pub fn from_json(json: &str) -> HxResult<Self> {
        let entries: Vec<Hexagram> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Check that every one of the 64 patterns resolves.
    pub fn verify_complete(&self) -> HxResult<()> {
        for pattern in 0..HEXAGRAM_COUNT {
            let lines = pattern_lines(pattern);
            if !self.by_lines.contains_key(&lines) {
                return Err(HxError::TableResolution {
                    key: binary_key(&lines),
                });
            }
        }
        Ok(())
    }

    /// Check that every pattern resolves to an entry holding that same
    /// pattern.
    pub fn verify_round_trip(&self) -> HxResult<()> {
        for pattern in 0..HEXAGRAM_COUNT {
            let lines = pattern_lines(pattern);
            let number = self.number_for(&lines)?;
            match self.get(number) {
                Some(entry) if entry.lines == lines => {}
                found => {
                    return Err(HxError::RoundTrip {
                        key: binary_key(&lines),
                        number,
                        found: found.map_or_else(|| "missing".to_string(), Hexagram::key),
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolve a line pattern to its hexagram number.
    pub fn number_for(&self, lines: &BinaryLines) -> HxResult<u8> {
        self.by_lines
            .get(lines)
            .copied()
            .ok_or_else(|| HxError::TableResolution {
                key: binary_key(lines),
            })
    }

    /// Look up a hexagram by number.
    pub fn get(&self, number: u8) -> Option<&Hexagram> {
        self.by_number.get(&number)
    }

    /// Entries in number order.
    pub fn iter(&self) -> impl Iterator<Item = &Hexagram> {
        self.by_number.values()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}

/// Lines for pattern `n` (0-63), bit 0 = bottom line.
fn pattern_lines(n: usize) -> BinaryLines {
    let mut lines = [Bit::Yin; LINE_COUNT];
    for (i, slot) in lines.iter_mut().enumerate() {
        if (n >> i) & 1 == 1 {
            *slot = Bit::Yang;
        }
    }
    lines
}
