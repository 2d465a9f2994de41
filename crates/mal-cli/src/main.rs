//! CLI frontend for the Malones lottery drawer and dialogue game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "malones",
    about = "Malones: lottery numbers and a chat at the door",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw EuroMillions tickets (5 of 1-50 plus 2 stars of 1-12)
    Draw {
        /// Number of tickets to draw (1-1000)
        #[arg(
            short,
            long,
            default_value = "1",
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=1000)
        )]
        count: usize,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print tickets as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play Malone's yes/no game on stdin
    Chat {
        /// JSON script with questions, yes_reply and no_reply
        #[arg(long)]
        script: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();

    debug!("malones started with verbosity level: {verbose}");
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Draw { count, seed, json } => commands::draw::run(count, seed, json),
        Commands::Chat { script } => commands::chat::run(script.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
