//! CLI Adapter.
//!
//! A thin operator front end over `app::api`. Data commands print JSON on
//! stdout; logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::app::api;
use crate::app::config::load_config;
use crate::domain::{AppError, StoreConfig, UpdateProjectInfoPair};

#[derive(Parser)]
#[command(name = "projmeta")]
#[command(version)]
#[command(about = "Inspect and maintain per-project metadata descriptors", long_about = None)]
struct Cli {
    /// Path to projmeta.toml (defaults to $PROJMETA_CONFIG, then built-in roots)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the metadata paths of a project
    Resolve {
        /// Project ID
        project_id: String,
    },
    /// Print the descriptor of a project
    #[clap(visible_alias = "s")]
    Show {
        /// Project ID
        project_id: String,
    },
    /// List projects that have a descriptor
    #[clap(visible_alias = "ls")]
    List,
    /// Set one descriptor key
    Set {
        /// Project ID
        project_id: String,
        /// Descriptor key (any name is accepted)
        key: String,
        /// New value, stored as a string unless --json is given
        value: String,
        /// Parse the value as JSON (e.g. true, 9229, "text")
        #[arg(long)]
        json: bool,
        /// Apply in memory and print, without writing the descriptor
        #[arg(long)]
        no_save: bool,
    },
    /// Delete a single entry inside a directory
    DeleteFile {
        /// Containing directory
        dir: PathBuf,
        /// Entry name
        name: String,
    },
    /// Recursively delete a directory
    DeleteFolder {
        /// Directory to delete
        path: PathBuf,
    },
    /// Delete a project's metadata directory
    #[clap(visible_alias = "rm")]
    Remove {
        /// Project ID
        project_id: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Resolve { project_id } => {
            print_json(&api::resolve_metadata(&config, &project_id))
        }
        Commands::Show { project_id } => run_show(&config, &project_id),
        Commands::List => {
            for project_id in api::list_projects(&config)? {
                println!("{}", project_id);
            }
            Ok(())
        }
        Commands::Set { project_id, key, value, json, no_save } => {
            let value = parse_value(&value, json)?;
            let pair = UpdateProjectInfoPair::new(key, value, !no_save);
            let updated = api::update_descriptor(&config, &project_id, &pair)?;
            print_json(&updated)
        }
        Commands::DeleteFile { dir, name } => api::delete_file(&dir, &name),
        Commands::DeleteFolder { path } => api::delete_store_folder(&config, &path),
        Commands::Remove { project_id } => api::remove_project(&config, &project_id),
    }
}

fn run_show(config: &StoreConfig, project_id: &str) -> Result<(), AppError> {
    let metadata = api::resolve_metadata(config, project_id);
    match api::load_descriptor(&metadata.info_file)? {
        Some(info) => print_json(&info),
        None => Err(AppError::ProjectNotFound {
            project_id: project_id.to_string(),
            path: metadata.info_file,
        }),
    }
}

fn parse_value(raw: &str, json: bool) -> Result<Value, AppError> {
    if !json {
        return Ok(Value::String(raw.to_string()));
    }
    serde_json::from_str(raw)
        .map_err(|err| AppError::invalid_argument(format!("value is not valid JSON: {err}")))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
