//! Interpretive text for hexagram numbers.
//!
//! The bundled table keys entries by hexagram number as a string. Missing
//! entries are not an error: callers get a fallback phrase instead.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::HxResult;

/// Shown when there is no hexagram to interpret.
pub const NO_DATA: &str = "NO DATA";

const BUNDLED: &str = include_str!("../data/meanings.json");

static STANDARD: LazyLock<Meanings> = LazyLock::new(|| {
    Meanings::from_json(BUNDLED).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "bundled meanings failed to parse, using empty table");
        Meanings::default()
    })
});

/// One interpretive entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    /// Short descriptive phrase.
    pub glitch_speak: String,
}

/// Interpretive phrases keyed by hexagram number.
#[derive(Debug, Clone, Default)]
pub struct Meanings {
    entries: HashMap<String, Meaning>,
}

impl Meanings {
    /// The bundled table.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Parse a JSON object of `{ "<number>": { "glitchSpeak": "..." } }`.
    pub fn from_json(json: &str) -> HxResult<Self> {
        let entries: HashMap<String, Meaning> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Look up the entry for a hexagram number.
    pub fn get(&self, number: u8) -> Option<&Meaning> {
        self.entries.get(&number.to_string())
    }

    /// The phrase for a number, with fallbacks for no number or no entry.
    pub fn glitch_speak(&self, number: Option<u8>) -> Cow<'_, str> {
        match number {
            None | Some(0) => Cow::Borrowed(NO_DATA),
            Some(n) => match self.get(n) {
                Some(meaning) => Cow::Borrowed(meaning.glitch_speak.as_str()),
                None => Cow::Owned(format!("UNKNOWN HEXAGRAM {n}")),
            },
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
