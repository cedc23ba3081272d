use hx_core::Seed;

pub fn run(seed: i64, json: bool) -> Result<(), String> {
    let engine = super::engine()?;
    let seed = Seed(seed);
    let reading = engine.resolve(seed).map_err(|e| e.to_string())?;
    super::print_reading(engine.table(), &reading, Some(seed), None, json)
}
