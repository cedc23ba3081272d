pub mod cast;
pub mod check;
pub mod draw;
pub mod lines;
pub mod meaning;
pub mod table;

use colored::Colorize;

use hx_core::{HexagramTable, Meanings, Reading, ReadingEngine, Seed};

use crate::render::{render_figure, title};

/// Build the engine over the standard table, failing on an incomplete table.
fn engine() -> Result<ReadingEngine<'static>, String> {
    ReadingEngine::standard().map_err(|e| format!("hexagram table self-check failed: {e}"))
}

/// Print a reading as text or JSON.
fn print_reading(
    table: &HexagramTable,
    reading: &Reading,
    seed: Option<Seed>,
    extra: Option<(&str, serde_json::Value)>,
    json: bool,
) -> Result<(), String> {
    let meanings = Meanings::standard();

    if json {
        let mut out = serde_json::json!({
            "seed": seed,
            "reading": reading,
            "meaning": meanings.glitch_speak(Some(reading.primary_number())),
            "changingMeaning": reading
                .changing_number()
                .map(|n| meanings.glitch_speak(Some(n))),
        });
        if let Some((key, value)) = extra {
            out[key] = value;
        }
        let rendered = serde_json::to_string_pretty(&out)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "HEXAGRAM".bold(),
        title(table, reading.primary_number()).bold()
    );
    if let Some(seed) = seed {
        println!("  {}", format!("seed {seed}").dimmed());
    }
    println!();
    for row in render_figure(reading) {
        println!("  {row}");
    }
    println!();
    println!(
        "  {}",
        meanings.glitch_speak(Some(reading.primary_number()))
    );

    if let Some(changing) = reading.changing_number() {
        let positions: Vec<String> = reading
            .changing_indices()
            .iter()
            .map(|i| (i + 1).to_string())
            .collect();
        println!();
        println!(
            "  {} {}",
            "> CHANGING TO:".red(),
            title(table, changing).red()
        );
        println!(
            "  {}",
            format!("lines {} change", positions.join(", ")).dimmed()
        );
        println!("  {}", meanings.glitch_speak(Some(changing)));
    }

    Ok(())
}
