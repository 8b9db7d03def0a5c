//! abi-manifest CLI
//!
//! Bakes the ABIs of the compiled core contracts into `gen_abis.rs`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "abi-manifest")]
#[command(about = "Generate the contract ABI table from compiled artifacts", version)]
struct Cli {
    /// Directory holding the compiled contract artifacts (<Name>.json)
    #[arg(long)]
    buildpath: PathBuf,

    /// Directory to write gen_abis.rs into
    #[arg(long, default_value = "./contract")]
    outpath: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ABI_MANIFEST_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match abi_manifest::generate(&cli.buildpath, &cli.outpath) {
        Ok(path) => println!("Wrote {}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
