//! spacedash - CLI dashboard for the public SpaceX launch API

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod output;
mod store;

use cli::{
    Cli, Commands, CrewCommands, GlobalOptions, LaunchCommands, MissionCommands, RocketCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Dashboard(args) => cli::dashboard::run(&opts, &args).await,
        Commands::Refresh => cli::refresh::run(&opts).await,
        Commands::Launch(cmd) => match cmd {
            LaunchCommands::List {
                upcoming,
                past,
                limit,
            } => cli::launch::list(&opts, upcoming, past, limit).await,
            LaunchCommands::Get { id } => cli::launch::get(&opts, &id).await,
            LaunchCommands::Next => cli::launch::next(&opts).await,
            LaunchCommands::Latest => cli::launch::latest(&opts).await,
        },
        Commands::Rocket(cmd) => match cmd {
            RocketCommands::List => cli::rocket::list(&opts).await,
            RocketCommands::Get { id } => cli::rocket::get(&opts, &id).await,
        },
        Commands::Crew(cmd) => match cmd {
            CrewCommands::List => cli::crew::list(&opts).await,
        },
        Commands::Mission(cmd) => match cmd {
            MissionCommands::Add {
                name,
                date,
                rocket,
                details,
                past,
            } => cli::mission::add(&opts, name, date, rocket, details, past).await,
            MissionCommands::List => cli::mission::list(&opts).await,
            MissionCommands::Remove { id } => cli::mission::remove(&opts, &id).await,
            MissionCommands::Edit {
                id,
                name,
                date,
                rocket,
                details,
            } => cli::mission::edit(&opts, &id, name, date, rocket, details).await,
        },
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("spacedash version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
