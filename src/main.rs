//! panelconf - inspect and normalise panel documents from the command line
//!
//! Commands are addressed as `<category> <command> [args...]`. With no
//! arguments, or `help`, the full command list is printed.

use std::{env, error::Error, process};

use panelconf::{
    cli::{CliService, PanelSource, formatting::format_error},
    tracing_config,
};
use tracing::debug;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_config::init("warn")?;

    let args: Vec<String> = env::args().skip(1).collect();
    run_cli_command(&args);

    Ok(())
}

/// Executes CLI commands through the CliService.
///
/// The profile used to look up panel names comes from `PANELCONF_PROFILE`,
/// falling back to the default profile.
///
/// # Arguments
/// * `args` - Command line arguments (excluding program name)
fn run_cli_command(args: &[String]) {
    let profile =
        env::var("PANELCONF_PROFILE").unwrap_or_else(|_| PanelSource::DEFAULT_PROFILE.to_string());
    debug!(%profile, "Using panel profile");

    let cli_service = CliService::new(PanelSource::new(profile));

    let category = match args.first().map(String::as_str) {
        None | Some("help" | "--help" | "-h") => {
            println!("{}", cli_service.help());
            return;
        }
        Some(category) => category,
    };
    let command = args.get(1).map(String::as_str).unwrap_or("");
    let command_args = args.get(2..).unwrap_or(&[]);

    match cli_service.execute_command(category, command, command_args) {
        Ok(output) => {
            if !output.trim().is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            process::exit(1);
        }
    }
}
