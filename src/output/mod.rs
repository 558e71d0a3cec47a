//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod display;
pub mod formatters;
pub mod json;
pub mod table;

/// Print a list of display rows in the requested format
pub fn print_rows<D: Tabled + Serialize>(rows: &[D], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", table::format_table(rows)),
        OutputFormat::Json => println!("{}", json::format_json(rows)?),
    }
    Ok(())
}
