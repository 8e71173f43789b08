use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{add, commit, init, log, status};

#[derive(Parser)]
#[command(name = "relic")]
#[command(version, about = "Minimal content-addressed version control", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new repository
    Init,

    /// Add a file to the staging area
    Add {
        /// File to stage
        file: String,
    },

    /// Commit staged files
    Commit {
        /// Commit message (multiple words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Show commit history
    Log,

    /// Show staged files
    Status,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => init::run()?,
        Commands::Add { file } => add::run(&file)?,
        Commands::Commit { message } => commit::run(&message.join(" "))?,
        Commands::Log => log::run()?,
        Commands::Status => status::run()?,
    }

    Ok(())
}
