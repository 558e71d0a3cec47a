//! Crew command implementations

use crate::error::Result;
use crate::output::display::CrewRow;
use crate::output::print_rows;

use super::{CommandContext, GlobalOptions};

/// Run the crew list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut crew = ctx.service.crew().await?;
    log::debug!("Fetched {} crew members", crew.len());

    // Active members first, then by name
    crew.sort_by(|a, b| b.is_active().cmp(&a.is_active()).then_with(|| a.name.cmp(&b.name)));

    let rows: Vec<CrewRow> = crew.iter().map(CrewRow::from).collect();
    print_rows(&rows, ctx.format)
}
