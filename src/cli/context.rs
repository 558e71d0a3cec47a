//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, client initialization, and mission-book wiring.

use std::path::PathBuf;

use crate::client::SpaceXClient;
use crate::config::Config;
use crate::error::Result;
use crate::store::{CacheConfig, LaunchService, MissionBook};

use super::{GlobalOptions, OutputFormat};

/// Context for command execution containing config, service, and options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,

    /// Launch data service: API client + resource store + cache policy
    pub service: LaunchService<SpaceXClient>,

    /// Persisted custom mission book
    pub missions: MissionBook,

    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// Format precedence: CLI flag / env var, then the config file
    /// preference, then the default.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;

        let client = match opts.api_host_ref() {
            Some(host) => SpaceXClient::with_base_url(host)?,
            None => SpaceXClient::new()?,
        };

        let cache = CacheConfig {
            timeout: config.cache_timeout(),
        };
        let service = LaunchService::new(client, cache);

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_preference)
            })
            .unwrap_or_default();

        let missions = MissionBook::at(Self::mission_path(opts)?);

        Ok(Self {
            config,
            service,
            missions,
            format,
        })
    }

    /// Load persisted custom missions into the store.
    pub async fn load_missions(&self) -> Result<()> {
        let missions = self.missions.load()?;
        self.service.store().set_missions(missions).await;
        Ok(())
    }

    /// Persist the store's missions back to the book.
    pub async fn save_missions(&self) -> Result<()> {
        let missions = self.service.store().missions().await;
        self.missions.save(&missions)
    }

    /// The mission book lives next to the config file.
    fn mission_path(opts: &GlobalOptions) -> Result<PathBuf> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let dir = config_path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(dir.join("missions.yaml"))
    }
}
