//! Init command - write a starter configuration file

use colored::Colorize;
use dialoguer::Confirm;

use crate::config::Config;
use crate::error::Result;

use super::GlobalOptions;

/// Run the init command
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;

    if path.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            println!("Leaving existing configuration untouched.");
            return Ok(());
        }
    }

    let config = Config::default();
    config.save_to(&path)?;

    println!("{} Wrote {}", "✓".green(), path.display());
    println!();
    println!("  cache timeout:    {}s", config.preferences.cache_timeout_secs);
    println!(
        "  dashboard limits: {} upcoming / {} past",
        config.preferences.upcoming_limit, config.preferences.past_limit
    );
    println!();
    println!("Run {} to see it in action.", "spacedash dashboard".cyan());

    Ok(())
}
