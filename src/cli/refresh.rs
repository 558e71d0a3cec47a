//! Force-refresh command implementation

use std::time::Duration;

use colored::Colorize;
use indicatif::ProgressBar;

use crate::error::Result;
use crate::output::json;

use super::{CommandContext, GlobalOptions, OutputFormat};

/// Run the refresh command: refetch every kind, report the tally
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Refreshing all resources...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = ctx.service.force_refresh_all().await;
    spinner.finish_and_clear();

    if ctx.format == OutputFormat::Json {
        println!("{}", json::format_json(&outcome)?);
        return Ok(());
    }

    if outcome.all_succeeded() {
        println!(
            "{} Refreshed {}/{} resources",
            "✓".green(),
            outcome.succeeded,
            outcome.total
        );
    } else {
        println!(
            "Refreshed {}/{} resources ({})",
            outcome.succeeded,
            outcome.total,
            format!("{} failed", outcome.failed).red()
        );
        for (kind, message) in ctx.service.store().errors().await {
            println!("  {} {}: {}", "✗".red(), kind.as_str(), message);
        }
    }

    Ok(())
}
