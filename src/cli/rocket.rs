//! Rocket command implementations

use colored::Colorize;

use crate::error::Result;
use crate::output::display::RocketRow;
use crate::output::{json, print_rows};

use super::{CommandContext, GlobalOptions, OutputFormat};

/// Run the rocket list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let rockets = ctx.service.rockets().await?;
    log::debug!("Fetched {} rockets", rockets.len());

    let rows: Vec<RocketRow> = rockets.iter().map(RocketRow::from).collect();
    print_rows(&rows, ctx.format)
}

/// Run the rocket get command
pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let rocket = ctx.service.rocket_by_id(id).await?;

    if ctx.format == OutputFormat::Json {
        println!("{}", json::format_json(&rocket)?);
        return Ok(());
    }

    println!("{}", rocket.name.bold());
    println!();
    println!("  Company:      {}", rocket.company);
    println!("  Country:      {}", rocket.country);
    println!(
        "  Active:       {}",
        if rocket.active {
            "yes".green()
        } else {
            "no".red()
        }
    );
    println!("  First flight: {}", rocket.first_flight);
    println!("  Stages:       {}", rocket.stages);
    println!("  Success rate: {}%", rocket.success_rate_pct);
    println!("  Cost/launch:  ${}M", rocket.cost_per_launch / 1_000_000);
    if let Some(meters) = rocket.height.meters {
        println!("  Height:       {} m", meters);
    }
    if let Some(kg) = rocket.mass.kg {
        println!("  Mass:         {} kg", kg);
    }
    if let Some(ref description) = rocket.description {
        println!();
        println!("  {}", description);
    }

    Ok(())
}
