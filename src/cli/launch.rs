//! Launch command implementations

use colored::Colorize;

use crate::client::models::{Launch, LaunchQueryOptions};
use crate::error::Result;
use crate::output::display::LaunchRow;
use crate::output::{formatters, json, print_rows};
use crate::store::FetchOutcome;

use super::{CommandContext, GlobalOptions, OutputFormat};

/// Default list size when no limit is given
const DEFAULT_LIST_LIMIT: usize = 20;

/// Run the launch list command
pub async fn list(
    opts: &GlobalOptions,
    upcoming: bool,
    past: bool,
    limit: Option<usize>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.load_missions().await?;

    let store = ctx.service.store();
    let records = if upcoming {
        ctx.service
            .fetch_upcoming(limit.unwrap_or(DEFAULT_LIST_LIMIT), false)
            .await?;
        store.combined_upcoming().await
    } else if past {
        ctx.service
            .fetch_past(limit.unwrap_or(DEFAULT_LIST_LIMIT), false)
            .await?;
        store.combined_past().await
    } else {
        let options = LaunchQueryOptions {
            limit,
            offset: None,
        };
        ctx.service.fetch_all(&options, false).await?;
        store.combined_all().await
    };

    let upcoming_count = records.iter().filter(|r| r.is_upcoming()).count();
    log::debug!(
        "Listing {} records ({} upcoming)",
        records.len(),
        upcoming_count
    );

    let mut rows: Vec<LaunchRow> = records.iter().map(LaunchRow::from).collect();
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    print_rows(&rows, ctx.format)
}

/// Run the launch get command
pub async fn get(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    match ctx.service.fetch_by_id(id).await? {
        FetchOutcome::Fetched(launch) | FetchOutcome::CacheHit(launch) => {
            print_launch(&launch, ctx.format)
        }
        FetchOutcome::InFlight(Some(launch)) => print_launch(&launch, ctx.format),
        FetchOutcome::InFlight(None) => {
            println!("{}", "A fetch for this launch is already in flight.".dimmed());
            Ok(())
        }
    }
}

/// Run the launch next command
pub async fn next(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let outcome = ctx.service.fetch_next(false).await?;
    print_outcome(outcome, ctx.format)
}

/// Run the launch latest command
pub async fn latest(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let outcome = ctx.service.fetch_latest(false).await?;
    print_outcome(outcome, ctx.format)
}

fn print_outcome(outcome: FetchOutcome<Launch>, format: OutputFormat) -> Result<()> {
    if !outcome.was_fetched() {
        log::debug!("Serving cached launch data");
    }
    match outcome.into_data() {
        Some(launch) => print_launch(&launch, format),
        None => {
            println!("{}", "No data available yet.".dimmed());
            Ok(())
        }
    }
}

fn print_launch(launch: &Launch, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", json::format_json(launch)?);
        return Ok(());
    }

    println!("{}", launch.name.bold());
    println!();
    println!("  ID:       {}", launch.id);
    println!("  Flight:   #{}", launch.flight_number);
    println!("  Date:     {}", formatters::format_date(&launch.date_utc));
    println!(
        "  When:     {}",
        formatters::format_relative(&launch.date_utc)
    );
    println!(
        "  Status:   {}",
        formatters::status_label(launch.status())
    );
    if let Some(ref rocket) = launch.rocket {
        println!("  Rocket:   {}", rocket);
    }
    if let Some(ref launchpad) = launch.launchpad {
        println!("  Pad:      {}", launchpad);
    }
    if !launch.crew.is_empty() {
        println!("  Crew:     {} aboard", launch.crew.len());
    }
    if let Some(ref details) = launch.details {
        println!();
        println!("  {}", formatters::truncate(details, 240));
    }
    if let Some(ref webcast) = launch.links.webcast {
        println!();
        println!("  Webcast:  {}", webcast.cyan());
    }
    if let Some(ref wikipedia) = launch.links.wikipedia {
        println!("  Wiki:     {}", wikipedia.cyan());
    }

    Ok(())
}
