#![warn(clippy::pedantic)]

mod config;
mod render;
mod repl;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use bitcube_core::CubeState;
use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};

/// Turns a 3x3x3 cube stored as six packed 64-bit faces
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// bitcube/config.toml in the user configuration directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a move sequence to a solved cube and print it as a net
    Show {
        /// The move sequence to apply, e.g. R U R' U'
        sequence: Vec<String>,
    },
    /// Apply a move sequence and print the 54 facelet string in URFDLB order
    Facelets {
        /// The move sequence to apply, e.g. R U R' U'
        sequence: Vec<String>,
    },
    /// Turn the cube interactively, one move sequence per line
    Repl,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = config::load(cli.config.as_deref())?;

    let mut cube = CubeState::new();
    cube.apply_notation(&config.start)
        .wrap_err("Invalid start sequence in configuration")?;
    if !config.start.is_empty() {
        info!(target: "config", "Applied start sequence {:?}", config.start);
    }

    match cli.command {
        Commands::Show { sequence } => {
            cube.apply_notation(&sequence.join(" "))?;
            repl::print_cube(&cube, &config, io::stdout().lock())?;
        }
        Commands::Facelets { sequence } => {
            cube.apply_notation(&sequence.join(" "))?;
            println!("{}", cube.facelet_string());
        }
        Commands::Repl => {
            let cube = repl::run(cube, &config, io::stdin().lock(), io::stdout().lock())?;
            io::stdout().flush()?;
            eprintln!("Exiting after {} turns", cube.history().len());
        }
    }

    Ok(())
}
