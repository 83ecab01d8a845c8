//! # reflist CLI
//!
//! Command-line interface for the reflist Harvard reference builder.

mod commands;
mod storage;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reflist")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "reflist.yml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default reflist.yml
    Init {
        /// Target directory (defaults to current directory)
        path: Option<PathBuf>,
    },

    /// List the available reference types
    Types {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the form for a reference type
    Show {
        /// Type key (see `reflist types`)
        type_key: String,

        /// Hide the example text under each field
        #[arg(long)]
        no_hints: bool,
    },

    /// Add a reference
    Add {
        /// Type key (see `reflist types`)
        type_key: String,

        /// Field value as name=value (repeatable)
        #[arg(short = 'f', long = "field", value_parser = commands::parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Re-render a reference with some fields changed
    Edit {
        /// Reference id (a unique prefix is enough)
        id: String,

        /// Field value as name=value (repeatable)
        #[arg(short = 'f', long = "field", value_parser = commands::parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Remove a reference
    Remove {
        /// Reference id (a unique prefix is enough)
        id: String,
    },

    /// Remove every reference
    Clear {
        /// Confirm clearing the whole list
        #[arg(long)]
        yes: bool,
    },

    /// Show the sorted reference list
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Write the reference list as plain text
    Export {
        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Output file (defaults to a timestamped name in the export directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print the reference list as HTML for pasting into a document
    Copy {
        /// Emit a complete HTML document rather than a fragment
        #[arg(long)]
        document: bool,
    },

    /// Import entries from a BibLaTeX file
    Import {
        /// Path to the .bib file
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for command output
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(if cli.verbose {
                tracing::Level::DEBUG.into()
            } else {
                tracing::Level::INFO.into()
            }),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Init { path } => commands::init_config(path.as_deref()),
        Commands::Types { json } => commands::list_types(json),
        Commands::Show { type_key, no_hints } => {
            commands::show_type(&cli.config, &type_key, no_hints)
        }
        Commands::Add { type_key, fields } => {
            commands::add_reference(&cli.config, &type_key, fields)
        }
        Commands::Edit { id, fields } => commands::edit_reference(&cli.config, &id, fields),
        Commands::Remove { id } => commands::remove_reference(&cli.config, &id),
        Commands::Clear { yes } => commands::clear_references(&cli.config, yes),
        Commands::List { json } => commands::list_references(&cli.config, json),
        Commands::Export { stdout, output } => {
            commands::export_text(&cli.config, stdout, output.as_deref())
        }
        Commands::Copy { document } => commands::copy_html(&cli.config, document),
        Commands::Import { file } => commands::import_bibliography(&cli.config, &file),
    }
}
