mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kaffa",
    version,
    about = "Quality-template constraint validation for coffee grading"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a template-parameters JSON file (single block or array)
    Validate {
        /// Path to parameters JSON file
        file: PathBuf,
    },
    /// Check grading measurements against a template's parameters
    Check {
        /// Path to parameters JSON file (single block or array)
        template: PathBuf,

        /// Path to measurements JSON file (screen sizes and recorded defects)
        measurements: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Inspect the predefined taint/fault templates
    Templates {
        #[command(subcommand)]
        action: TemplatesAction,
    },
    /// Print the parameters JSON schema with field descriptions and examples
    Schema,
}

#[derive(Subcommand)]
enum TemplatesAction {
    /// List predefined templates
    List,
    /// Explain a template in plain language
    Explain {
        /// Template id (e.g., "sca-standard")
        id: String,
    },
    /// Print a template's configuration JSON as a customization starting point
    Show {
        /// Template id (e.g., "sca-standard")
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { file } => commands::validate::run(&file),
        Commands::Check {
            template,
            measurements,
            output,
        } => commands::check::run(&template, &measurements, &output),
        Commands::Templates { action } => match action {
            TemplatesAction::List => commands::templates::list(),
            TemplatesAction::Explain { id } => commands::templates::explain(&id),
            TemplatesAction::Show { id } => commands::templates::show(&id),
        },
        Commands::Schema => commands::schema::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
