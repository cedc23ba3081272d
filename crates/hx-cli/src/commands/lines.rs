use hx_core::line::lines_from_values;

pub fn run(values: &[u8], json: bool) -> Result<(), String> {
    let engine = super::engine()?;
    let lines = lines_from_values(values).map_err(|e| e.to_string())?;
    let reading = engine.read_lines(lines).map_err(|e| e.to_string())?;
    super::print_reading(engine.table(), &reading, None, None, json)
}
