//! CLI command definitions and handlers

use clap::{Args, Parser, Subcommand};

pub mod context;
pub mod crew;
pub mod dashboard;
pub mod init;
pub mod launch;
pub mod mission;
pub mod refresh;
pub mod rocket;
pub mod status;

pub use context::CommandContext;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a config-file preference value
    pub fn from_preference(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Global CLI options passed to all command handlers.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format, when given on the command line or via env
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.spacedash/config.yaml)
    pub config: Option<String>,

    /// Custom API host for development/testing
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}

/// spacedash - dashboard for the public SpaceX launch API
#[derive(Parser, Debug)]
#[command(name = "spacedash")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "SPACEDASH_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "SPACEDASH_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Custom API host for development/testing
    #[arg(long, global = true, env = "SPACEDASH_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SPACEDASH_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the launch dashboard
    Dashboard(DashboardArgs),

    /// Force a refresh of every cached resource
    Refresh,

    /// Browse launches
    #[command(subcommand)]
    Launch(LaunchCommands),

    /// Browse rockets
    #[command(subcommand)]
    Rocket(RocketCommands),

    /// Browse crew members
    #[command(subcommand)]
    Crew(CrewCommands),

    /// Manage local custom missions
    #[command(subcommand)]
    Mission(MissionCommands),

    /// Write a starter configuration file
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,
}

/// Dashboard display options
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Upcoming launches to display
    #[arg(long)]
    pub upcoming_limit: Option<usize>,

    /// Past launches to display
    #[arg(long)]
    pub past_limit: Option<usize>,

    /// Bypass the cache and refetch everything
    #[arg(long)]
    pub force: bool,

    /// Keep the dashboard open and refresh on an interval
    #[arg(long)]
    pub watch: bool,

    /// Refresh interval in seconds for watch mode
    #[arg(long, default_value = "30")]
    pub interval: u64,
}

/// Launch subcommands
#[derive(Subcommand, Debug)]
pub enum LaunchCommands {
    /// List launches (custom missions included)
    List {
        /// Only upcoming launches
        #[arg(long, conflicts_with = "past")]
        upcoming: bool,

        /// Only past launches
        #[arg(long)]
        past: bool,

        /// Maximum results to return
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show one launch by ID
    Get {
        /// Launch ID
        id: String,
    },

    /// Show the next scheduled launch
    Next,

    /// Show the most recent launch
    Latest,
}

/// Rocket subcommands
#[derive(Subcommand, Debug)]
pub enum RocketCommands {
    /// List rockets
    List,

    /// Show one rocket by ID
    Get {
        /// Rocket ID
        id: String,
    },
}

/// Crew subcommands
#[derive(Subcommand, Debug)]
pub enum CrewCommands {
    /// List crew members
    List,
}

/// Custom mission subcommands
#[derive(Subcommand, Debug)]
pub enum MissionCommands {
    /// Add a custom mission (prompts for missing fields)
    Add {
        /// Mission name
        #[arg(long)]
        name: Option<String>,

        /// Launch date (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// Rocket name
        #[arg(long)]
        rocket: Option<String>,

        /// Mission details
        #[arg(long)]
        details: Option<String>,

        /// Record as already flown
        #[arg(long)]
        past: bool,
    },

    /// List custom missions
    List,

    /// Remove a custom mission by ID
    Remove {
        /// Mission ID
        id: String,
    },

    /// Edit a custom mission
    Edit {
        /// Mission ID
        id: String,

        /// New mission name
        #[arg(long)]
        name: Option<String>,

        /// New launch date (RFC 3339 or YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,

        /// New rocket name
        #[arg(long)]
        rocket: Option<String>,

        /// New mission details
        #[arg(long)]
        details: Option<String>,
    },
}
