//! Dashboard command implementation

use std::time::Duration;

use colored::Colorize;
use indicatif::ProgressBar;
use serde::Serialize;

use crate::client::SpaceXClient;
use crate::client::models::Launch;
use crate::error::Result;
use crate::output::display::LaunchRow;
use crate::output::{formatters, json, table};
use crate::store::{
    LaunchService, MissionRecord, RefreshOptions, RefreshOutcome, ResourceEntry, ResourceKind,
};

use super::{CommandContext, DashboardArgs, GlobalOptions, OutputFormat};

/// Run the dashboard command
pub async fn run(opts: &GlobalOptions, args: &DashboardArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.load_missions().await?;

    let options = RefreshOptions {
        upcoming_limit: args
            .upcoming_limit
            .unwrap_or(ctx.config.preferences.upcoming_limit),
        past_limit: args.past_limit.unwrap_or(ctx.config.preferences.past_limit),
    };

    if args.watch {
        let interval = Duration::from_secs(args.interval.max(1));
        loop {
            let outcome = refresh(&ctx.service, &options, args.force).await;
            render(&ctx, &outcome).await?;
            // Reported once is enough; the next failing fetch re-records
            ctx.service.store().clear_errors().await;
            println!(
                "{}",
                format!("refreshing every {}s, ctrl-c to exit", interval.as_secs()).dimmed()
            );
            tokio::time::sleep(interval).await;
        }
    }

    let outcome = refresh(&ctx.service, &options, args.force).await;
    render(&ctx, &outcome).await
}

async fn refresh(
    service: &LaunchService<SpaceXClient>,
    options: &RefreshOptions,
    force: bool,
) -> RefreshOutcome {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Refreshing launch data...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = if force {
        service.force_refresh_all().await
    } else {
        service.refresh_dashboard(options).await
    };

    spinner.finish_and_clear();
    outcome
}

/// Machine-readable dashboard snapshot
#[derive(Serialize)]
struct Snapshot {
    refresh: RefreshOutcome,
    next: Option<Launch>,
    latest: Option<Launch>,
    upcoming: Vec<MissionRecord>,
    past: Vec<MissionRecord>,
    any_loading: bool,
    stale_kinds: Vec<&'static str>,
    errors: Vec<SnapshotError>,
}

#[derive(Serialize)]
struct SnapshotError {
    kind: &'static str,
    message: String,
}

async fn render(ctx: &CommandContext, outcome: &RefreshOutcome) -> Result<()> {
    let store = ctx.service.store();

    if ctx.format == OutputFormat::Json {
        let cache = ctx.service.cache_config();
        let mut stale_kinds = Vec::new();
        for kind in ResourceKind::ALL_KINDS {
            if store.is_stale(kind, &cache).await {
                stale_kinds.push(kind.as_str());
            }
        }

        let snapshot = Snapshot {
            refresh: *outcome,
            next: store.next().await.data,
            latest: store.latest().await.data,
            upcoming: store.combined_upcoming().await,
            past: store.combined_past().await,
            any_loading: store.has_any_loading().await,
            stale_kinds,
            errors: store
                .errors()
                .await
                .into_iter()
                .map(|(kind, message)| SnapshotError {
                    kind: kind.as_str(),
                    message,
                })
                .collect(),
        };
        println!("{}", json::format_json(&snapshot)?);
        return Ok(());
    }

    println!();
    println!("{}", "SpaceX Mission Dashboard".bold());
    println!(
        "{}",
        format!("updated {}", chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")).dimmed()
    );
    println!();

    render_single("Next", &store.next().await, true);
    render_single("Latest", &store.latest().await, false);
    println!();

    println!("{}", "Upcoming launches".bold());
    let upcoming: Vec<LaunchRow> = store
        .combined_upcoming()
        .await
        .iter()
        .map(LaunchRow::from)
        .collect();
    println!("{}", table::format_table(&upcoming));
    println!();

    println!("{}", "Past launches".bold());
    let past: Vec<LaunchRow> = store
        .combined_past()
        .await
        .iter()
        .map(LaunchRow::from)
        .collect();
    println!("{}", table::format_table(&past));
    println!();

    for (kind, message) in store.errors().await {
        println!(
            "{} {}: {}",
            "✗".red(),
            kind.as_str(),
            message.red()
        );
    }

    if outcome.all_succeeded() {
        println!(
            "Refreshed {}/{} resources",
            outcome.succeeded, outcome.total
        );
    } else {
        println!(
            "Refreshed {}/{} resources ({})",
            outcome.succeeded,
            outcome.total,
            format!("{} failed", outcome.failed).red()
        );
    }

    Ok(())
}

fn render_single(label: &str, entry: &ResourceEntry<Launch>, countdown: bool) {
    match (&entry.data, &entry.error) {
        (Some(launch), _) => {
            let extra = if countdown {
                formatters::format_relative(&launch.date_utc)
            } else {
                formatters::status_label(launch.status())
            };
            println!(
                "{:<8} {}  {}  ({})",
                format!("{}:", label).bold(),
                launch.name,
                formatters::format_date(&launch.date_utc),
                extra
            );
        }
        (None, Some(error)) => {
            println!("{:<8} {}", format!("{}:", label).bold(), error.red());
        }
        (None, None) => {
            println!("{:<8} {}", format!("{}:", label).bold(), "no data".dimmed());
        }
    }
}
