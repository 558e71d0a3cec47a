//! Custom mission command implementations
//!
//! Custom missions are local annotations merged into the displayed launch
//! lists. They live in the mission book next to the config file; every
//! mutation goes through the store and is persisted back.

use chrono::{DateTime, NaiveDate, Utc};
use colored::Colorize;
use dialoguer::{Confirm, Input};

use crate::error::{Error, Result};
use crate::output::display::MissionRow;
use crate::output::print_rows;
use crate::store::{CustomMission, MissionPatch};

use super::{CommandContext, GlobalOptions};

/// Parse a mission date given as RFC 3339 or a bare YYYY-MM-DD day
fn parse_mission_date(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }
    if let Ok(day) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(datetime) = day.and_hms_opt(0, 0, 0) {
            return Ok(datetime.and_utc());
        }
    }
    Err(Error::InvalidArgument(format!(
        "invalid date '{}' (expected RFC 3339 or YYYY-MM-DD)",
        value
    )))
}

/// Run the mission add command, prompting for any missing field
pub async fn add(
    opts: &GlobalOptions,
    name: Option<String>,
    date: Option<String>,
    rocket: Option<String>,
    details: Option<String>,
    past: bool,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.load_missions().await?;

    let name = match name {
        Some(name) => name,
        None => Input::new().with_prompt("Mission name").interact_text()?,
    };

    let date = match date {
        Some(date) => parse_mission_date(&date)?,
        None => {
            let value: String = Input::new()
                .with_prompt("Launch date (YYYY-MM-DD)")
                .interact_text()?;
            parse_mission_date(&value)?
        }
    };

    let rocket = match rocket {
        Some(rocket) => rocket,
        None => Input::new()
            .with_prompt("Rocket")
            .default("Falcon 9".to_string())
            .interact_text()?,
    };

    let upcoming = if past {
        false
    } else if date < Utc::now() {
        // A date in the past usually means a flown mission; double-check
        !Confirm::new()
            .with_prompt("The date is in the past. Record as flown?")
            .default(true)
            .interact()?
    } else {
        true
    };

    let mission = CustomMission::new(name, upcoming, date, rocket, details);
    let store = ctx.service.store();
    store.add_mission(mission.clone()).await;
    ctx.save_missions().await?;

    println!(
        "{} Added custom mission {} ({})",
        "✓".green(),
        mission.name.bold(),
        mission.id
    );

    Ok(())
}

/// Run the mission list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.load_missions().await?;

    let missions = ctx.service.store().missions().await;
    let rows: Vec<MissionRow> = missions.iter().map(MissionRow::from).collect();
    print_rows(&rows, ctx.format)
}

/// Run the mission remove command
pub async fn remove(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.load_missions().await?;

    if !ctx.service.store().remove_mission(id).await {
        return Err(Error::InvalidArgument(format!(
            "no custom mission with id {}",
            id
        )));
    }
    ctx.save_missions().await?;

    println!("{} Removed custom mission {}", "✓".green(), id);
    Ok(())
}

/// Run the mission edit command
pub async fn edit(
    opts: &GlobalOptions,
    id: &str,
    name: Option<String>,
    date: Option<String>,
    rocket: Option<String>,
    details: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.load_missions().await?;

    let date_utc = match date {
        Some(ref value) => Some(parse_mission_date(value)?),
        None => None,
    };

    let patch = MissionPatch {
        name,
        upcoming: None,
        date_utc,
        rocket,
        details,
    };
    if patch.is_empty() {
        return Err(Error::InvalidArgument(
            "nothing to update; pass at least one of --name/--date/--rocket/--details".to_string(),
        ));
    }

    if !ctx.service.store().update_mission(id, &patch).await {
        return Err(Error::InvalidArgument(format!(
            "no custom mission with id {}",
            id
        )));
    }
    ctx.save_missions().await?;

    println!("{} Updated custom mission {}", "✓".green(), id);
    Ok(())
}
