// ===== timeforge/src/main.rs =====
use clap::{Parser, Subcommand};
use std::process;
use timeforge::loader;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Session table CSV
    #[arg(global = true, short, long, default_value = "data/sessions.csv")]
    input: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for a conflict-free assignment
    Optimize(cmd::optimize::OptimizeArgs),
    /// Score the input assignment as-is
    Validate(cmd::validate::ValidateArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("📂 Loading sessions: {}", cli.input);
    let timetable = loader::load_sessions(&cli.input).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    info!("   {} sessions loaded", timetable.len());

    let result = match cli.command {
        Commands::Optimize(args) => cmd::optimize::run(args, &timetable),
        Commands::Validate(args) => cmd::validate::run(args, &timetable),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
