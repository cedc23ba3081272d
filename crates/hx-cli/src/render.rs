//! Plain-text rendering of hexagrams.
//!
//! Lines are drawn top to bottom, the way a hexagram is read off the page.
//! Old lines carry a marker: `o` for old yang, `x` for old yin.

use hx_core::{Bit, HexagramTable, LINE_COUNT, Line, Reading};

const YANG: &str = "━━━━━━━━━";
const YIN: &str = "━━━   ━━━";
const GLYPH_WIDTH: usize = 9;

fn glyph(bit: Bit) -> &'static str {
    match bit {
        Bit::Yang => YANG,
        Bit::Yin => YIN,
    }
}

/// Cast lines, top first, with old-line markers.
pub fn render_lines(lines: &[Line; LINE_COUNT]) -> Vec<String> {
    lines
        .iter()
        .rev()
        .map(|line| match line {
            Line::OldYang => format!("{} o", glyph(line.bit())),
            Line::OldYin => format!("{} x", glyph(line.bit())),
            Line::YoungYang | Line::YoungYin => glyph(line.bit()).to_string(),
        })
        .collect()
}

/// Binary lines, top first.
pub fn render_bits(bits: &[Bit; LINE_COUNT]) -> Vec<String> {
    bits.iter().rev().map(|&b| glyph(b).to_string()).collect()
}

/// The cast beside its changing hexagram, or the cast alone.
pub fn render_figure(reading: &Reading) -> Vec<String> {
    let cast = render_lines(reading.lines());
    let Some(changed) = reading.changing_lines() else {
        return cast;
    };
    cast.iter()
        .zip(render_bits(changed))
        .map(|(left, right)| format!("{left:<width$}  →  {right}", width = GLYPH_WIDTH + 2))
        .collect()
}

/// `"<n> · <name> (<english>)"`, or just the number if the table lacks it.
pub fn title(table: &HexagramTable, number: u8) -> String {
    match table.get(number) {
        Some(h) if !h.name.is_empty() => format!("{number} · {} ({})", h.name, h.english),
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hx_core::{ReadingEngine, Seed};

    #[test]
    fn seed_forty_two_column() {
        let reading = ReadingEngine::standard().unwrap().resolve(Seed(42)).unwrap();
        insta::assert_snapshot!(render_lines(reading.lines()).join("\n"), @r"
        ━━━   ━━━ x
        ━━━━━━━━━
        ━━━━━━━━━
        ━━━━━━━━━ o
        ━━━   ━━━ x
        ━━━   ━━━
        ");
    }

    #[test]
    fn stable_reading_has_single_column() {
        let reading = ReadingEngine::standard().unwrap().resolve(Seed(1)).unwrap();
        let figure = render_figure(&reading);
        assert_eq!(figure.len(), 6);
        assert!(figure.iter().all(|row| !row.contains('→')));
    }

    #[test]
    fn changing_reading_has_two_columns() {
        let reading = ReadingEngine::standard().unwrap().resolve(Seed(42)).unwrap();
        let figure = render_figure(&reading);
        assert_eq!(figure[0], format!("{YIN} x  →  {YANG}"));
        assert_eq!(figure[5], format!("{YIN}    →  {YIN}"));
    }

    #[test]
    fn titles() {
        let table = HexagramTable::standard().unwrap();
        assert_eq!(title(table, 60), "60 · Jie (Limitation)");
        let bare = HexagramTable::from_json(r#"[{"number": 5, "lines": [1,1,1,0,1,0]}]"#).unwrap();
        assert_eq!(title(&bare, 5), "5");
        assert_eq!(title(&bare, 9), "9");
    }
}
