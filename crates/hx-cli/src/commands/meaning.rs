use colored::Colorize;

use hx_core::{HexagramTable, Meanings};

pub fn run(number: u8) -> Result<(), String> {
    let table = HexagramTable::standard().map_err(|e| e.to_string())?;
    let hexagram = table
        .get(number)
        .ok_or_else(|| format!("no hexagram numbered {number} (expected 1-64)"))?;

    println!(
        "  {} {}",
        "HEXAGRAM".bold(),
        crate::render::title(table, number).bold()
    );
    println!("  {}", format!("lines {} (bottom first)", hexagram.key()).dimmed());
    println!();
    println!("  {}", Meanings::standard().glitch_speak(Some(number)));
    Ok(())
}
