//! CLI entry point for the Obol backend (for dev and testing).

use clap::Parser;
use obol_core::{data_dir, ensure_data_dir, load_config, set_network, status};

#[derive(Parser)]
#[command(name = "obol")]
#[command(about = "Obol: wallet app around an embedded chain node")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show backend status (for dev).
    Status,
    /// Show where the embedded node keeps its data directory.
    DataDir,
    /// Create the data directory if missing (what the app shell does at launch).
    Provision,
    /// Show the configured network, or set it.
    Network {
        /// Network name to switch to ("main", "test", "regtest").
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => {
            println!("Obol backend");
            println!("  core: {}", status());
        }
        Commands::DataDir => {
            match data_dir() {
                Some(p) => println!("{}", p.display()),
                None => eprintln!("Could not determine the storage root."),
            }
        }
        Commands::Provision => {
            ensure_data_dir();
            // The provisioner itself never reports; observe the outcome here.
            match data_dir() {
                Some(p) if p.is_dir() => println!("Data directory ready: {}", p.display()),
                Some(p) => eprintln!("Data directory still missing: {}", p.display()),
                None => eprintln!("Could not determine the storage root."),
            }
        }
        Commands::Network { name } => match name {
            Some(name) => match set_network(&name) {
                Ok(()) => println!("Network set to {}", name),
                Err(e) => eprintln!("Error: {}", e),
            },
            None => println!("{}", load_config().network()),
        },
    }
}
