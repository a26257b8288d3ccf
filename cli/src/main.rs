mod cli;
mod commands;
mod output;

use arcmarks::{config, error::Result};
use clap::Parser;
use output::colorize::paint_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = cli::Cli::parse();

    // Initialize logger
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }

    let color = !args.nc;
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", paint_error(&format!("Error: {}", e), color));
            ExitCode::FAILURE
        }
    }
}

fn run(args: cli::Cli) -> Result<ExitCode> {
    if args.version {
        println!("arcmarks {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration
    let cfg = if let Some(config_path) = &args.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()
    };

    cli::handle_args(args, cfg)
}
