//! Writes the panel document JSON Schema and the stock panel to disk.
use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};
use panelconf::config::PanelConfig;

#[derive(Parser)]
#[command(name = "generate-schema")]
#[command(about = "Generate the JSON Schema and stock document for panel files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// JSON Schema describing panel documents
    Schema {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// The built-in default panel document
    Default {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (text, output) = match cli.command {
        Commands::Schema { output } => {
            (serde_json::to_string_pretty(&PanelConfig::json_schema())?, output)
        }
        Commands::Default { output } => (PanelConfig::default().to_json_string()?, output),
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, format!("{text}\n"))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{text}"),
    }

    Ok(())
}
