//! Status command implementation

use colored::Colorize;

use crate::client::API_BASE_URL;
use crate::config::Config;
use crate::error::Result;
use crate::store::MissionBook;

use super::GlobalOptions;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "spacedash configuration".bold());

    let path = Config::resolve_path(opts.config_ref())?;

    match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            if path.exists() {
                println!("Config file: {}", path.display().to_string().cyan());
            } else {
                println!(
                    "Config file: {} {}",
                    path.display().to_string().cyan(),
                    "(not written, using defaults)".dimmed()
                );
            }

            println!(
                "Cache timeout: {}s",
                config.preferences.cache_timeout_secs
            );
            println!(
                "Dashboard limits: {} upcoming / {} past",
                config.preferences.upcoming_limit, config.preferences.past_limit
            );

            let mission_dir = path
                .parent()
                .map(std::path::PathBuf::from)
                .unwrap_or_else(|| std::path::PathBuf::from("."));
            let book = MissionBook::at(mission_dir.join("missions.yaml"));
            match book.load() {
                Ok(missions) => println!("Custom missions: {}", missions.len()),
                Err(err) => println!("Custom missions: {} {}", "unreadable".red(), err),
            }

            let api_host = opts
                .api_host_ref()
                .unwrap_or(API_BASE_URL);
            println!("API host: {}", api_host.cyan());
        }
        Err(err) => {
            println!("{} {}", "✗".red(), err);
            println!();
            println!(
                "Run {} to create a configuration file.",
                "spacedash init".cyan()
            );
        }
    }

    Ok(())
}
