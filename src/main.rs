//! ethconfig CLI
//!
//! Entry point for the `ethconfig` command-line tool.

use clap::{Parser, Subcommand};
use ethconfig::logging::{init_logging, LogFormat};
use ethconfig::{parse_overlay, EffectiveConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "ethconfig")]
#[command(about = "Export and check node configuration overlays", version)]
struct Cli {
    /// Log filter (overridden by ETHCONFIG_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log output format: text or json
    #[arg(long, global = true, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration as an overlay document
    Dump {
        /// Overlay files to apply on top of the defaults, in order
        #[arg(long = "config", short = 'c')]
        configs: Vec<PathBuf>,

        /// Also print the contributing sources as JSON on stderr
        #[arg(long)]
        sources: bool,
    },

    /// Parse an overlay document and print its normalized form
    Check {
        /// Overlay file to check
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_level, cli.log_format) {
        eprintln!("{}", e);
        process::exit(2);
    }

    match cli.command {
        Commands::Dump { configs, sources } => run_dump(&configs, sources),
        Commands::Check { file } => run_check(&file),
    }
}

fn run_dump(configs: &[PathBuf], show_sources: bool) {
    let effective = match EffectiveConfig::build(configs) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    if show_sources {
        match effective.provenance_json() {
            Ok(json) => eprintln!("{}", json),
            Err(e) => {
                eprintln!("Error serializing sources: {}", e);
                process::exit(1);
            }
        }
    }

    match effective.overlay().to_toml_string() {
        Ok(doc) => print!("{}", doc),
        Err(e) => {
            eprintln!("Error rendering configuration: {}", e);
            process::exit(1);
        }
    }
}

fn run_check(path: &Path) {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            process::exit(1);
        }
    };

    let overlay = match parse_overlay(&bytes) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}: {}", path.display(), e);
            process::exit(1);
        }
    };

    if overlay.is_empty() {
        eprintln!("{}: no fields set", path.display());
        return;
    }

    match overlay.to_toml_string() {
        Ok(doc) => print!("{}", doc),
        Err(e) => {
            eprintln!("Error rendering overlay: {}", e);
            process::exit(1);
        }
    }
}
