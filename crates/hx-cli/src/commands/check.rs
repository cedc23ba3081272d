use hx_core::{HexagramTable, Meanings};

pub fn run() -> Result<(), String> {
    let engine = super::engine()?;
    let table: &HexagramTable = engine.table();

    // Entries to patterns, then every pattern back to its entry.
    for hexagram in table.iter() {
        let number = table.number_for(&hexagram.lines).map_err(|e| e.to_string())?;
        if number != hexagram.number {
            return Err(format!(
                "round trip failed: {} resolves to {number}, expected {}",
                hexagram.key(),
                hexagram.number
            ));
        }
    }
    table.verify_round_trip().map_err(|e| e.to_string())?;

    let meanings = Meanings::standard();
    let missing: Vec<String> = table
        .iter()
        .filter(|h| meanings.get(h.number).is_none())
        .map(|h| h.number.to_string())
        .collect();

    println!("  All checks passed: {} hexagrams resolve both ways.", table.len());
    if missing.is_empty() {
        println!("  {} meanings loaded.", meanings.len());
    } else {
        println!("  No meaning for: {}", missing.join(", "));
    }

    Ok(())
}
