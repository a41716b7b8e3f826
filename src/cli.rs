//! CLI definitions using clap.

use clap::{Parser, Subcommand};

use crate::commands;


/// AQI Streak - daily clean-air streak tracker for Central Delhi
#[derive(Parser)]
#[command(name = "aqstreak")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Fetch today's AQI, record it, and post the status update
    Run {
        /// Fetch and compute only; persist nothing, post nothing
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the current streak and record summary
    Status,

    /// List recent daily records
    History {
        /// Number of days to show
        #[arg(short, long, default_value_t = 14)]
        days: usize,
    },

    /// Replay a sequence of AQI values through the streak counter
    Simulate {
        /// Comma-separated AQI values, e.g. 20,15,30
        values: String,
    },

    /// Delete all recorded days
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run { dry_run }) => commands::run::run(dry_run),
        Some(Commands::Status) => commands::status::run(),
        Some(Commands::History { days }) => commands::history::run(days),
        Some(Commands::Simulate { values }) => commands::simulate::run(&values),
        Some(Commands::Reset { force }) => commands::reset::run(force),
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
