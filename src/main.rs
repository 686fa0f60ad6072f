#![allow(clippy::cargo_common_metadata)]
use anyhow::{Context, Result};
use clipboard_store::{
    cli::{self, Args},
    config::Config,
    core::{Store, SystemClipboard},
    error::ClipError,
    setup_logging,
};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => return cli::report_parse_error(&e),
    };

    // Setup logging based on debug flag
    if let Err(e) = setup_logging(args.debug) {
        eprintln!("Warning: {e:#}");
    }

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            println!("Error: {e:#}");
            if e.downcast_ref::<ClipError>().is_some_and(ClipError::wants_usage) {
                print!("{}", cli::usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let config = Config::from_args(args)?;

    let mut store = Store::load(&config.store_path).context("Failed to load clipboard store")?;

    let Some(command) = &args.command else {
        print!("{}", cli::usage());
        return Ok(ExitCode::FAILURE);
    };

    // Execute the appropriate command
    cli::execute_command(command, &mut store, &SystemClipboard::new(), &mut io::stdout().lock())?;
    Ok(ExitCode::SUCCESS)
}
