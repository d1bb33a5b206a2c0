mod client;
mod commands;
mod daemon_launcher;

use clap::{Parser, Subcommand};
use commands::{Direction, DurationKind};

#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "Pomodoro timer - control the pomodoro daemon", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a focus session, or pause/resume the current one
    #[command(visible_alias = "pause")]
    Play,
    /// Stop the current session and unlock the durations
    Stop,
    /// Adjust the focus duration (5 to 60 min, by 5)
    Focus {
        #[arg(value_enum)]
        direction: Direction,
    },
    /// Adjust the break duration (1 to 15 min, by 1)
    Break {
        #[arg(value_enum)]
        direction: Direction,
    },
    /// Show the current session
    Status {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Follow the countdown until interrupted
    Watch,
    /// Stop the pomodoro daemon
    Shutdown,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play => commands::play().await,
        Commands::Stop => commands::stop().await,
        Commands::Focus { direction } => commands::adjust(DurationKind::Focus, direction).await,
        Commands::Break { direction } => commands::adjust(DurationKind::Break, direction).await,
        Commands::Status { json } => commands::status(json).await,
        Commands::Watch => commands::watch().await,
        Commands::Shutdown => commands::shutdown().await,
    }
}
