use comfy_table::{ContentArrangement, Table};

use hx_core::{HexagramTable, Meanings};

use crate::render::render_bits;

pub fn run() -> Result<(), String> {
    let hexagrams = HexagramTable::standard().map_err(|e| e.to_string())?;
    let meanings = Meanings::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Figure", "Lines", "Meaning"]);

    for hexagram in hexagrams.iter() {
        table.add_row(vec![
            hexagram.number.to_string(),
            format!("{} ({})", hexagram.name, hexagram.english),
            render_bits(&hexagram.lines).join("\n"),
            hexagram.key(),
            meanings.glitch_speak(Some(hexagram.number)).into_owned(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} hexagrams", hexagrams.len());

    Ok(())
}
