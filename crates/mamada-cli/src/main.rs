use clap::{Parser, Subcommand};

mod commands;
mod logging;

use logging::Verbosity;

#[derive(Parser)]
#[command(name = "mamada-cli", version, about = "Mamada Tracker CLI")]
struct Cli {
    /// More log output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Caregiver profile
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Current screen and last feeding
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Time a feeding interactively
    Track(commands::track::TrackArgs),
    /// Recorded feedings
    Sessions {
        #[command(subcommand)]
        action: commands::sessions::SessionsAction,
    },
    /// Daily report and export
    Report {
        #[command(subcommand)]
        action: commands::report::ReportAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(Verbosity::from_flags(cli.verbose, cli.quiet));

    let result = match cli.command {
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Status { json } => commands::status::run(json),
        Commands::Track(args) => commands::track::run(args),
        Commands::Sessions { action } => commands::sessions::run(action),
        Commands::Report { action } => commands::report::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
