use std::io::Write;

use anyhow::Result;
use serde::Serialize;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Json,
    Csv,
}

pub fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_csv<T: Serialize>(rows: &[T]) -> Result<()> {
    write_csv(std::io::stdout(), rows)
}

/// Writes `rows` with a header row taken from the record's field names.
fn write_csv<W: Write, T: Serialize>(writer: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
