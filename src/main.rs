//! Extension packager CLI

use clap::Parser;
use colored::*;
use extpack::models::{DEFAULT_MANIFEST_NAME, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_DIR};
use extpack::{package_extension, PackageOptions, PackageOutcome};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "extpack")]
#[command(about = "Package a browser extension for deployment", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Extension source directory
    #[arg(long, default_value = DEFAULT_SOURCE_DIR)]
    source: PathBuf,

    /// Path to the generated zip archive
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Host or URL pattern to write to host_permissions. Repeat for multiple
    /// hosts. Plain host names expand to https://HOST/* (and http://HOST/*
    /// with --allow-http)
    #[arg(long = "host", visible_alias = "allowed-host", value_name = "HOST")]
    hosts: Vec<String>,

    /// Include http:// host permissions for each plain host (testing only)
    #[arg(long)]
    allow_http: bool,

    /// Override the manifest version string
    #[arg(long, value_name = "STRING")]
    version: Option<String>,

    /// Show the derived manifest metadata without writing files
    #[arg(long)]
    dry_run: bool,

    /// Log pipeline steps to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = PackageOptions {
        source_dir: cli.source,
        output_path: cli.output,
        manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
        hosts: cli.hosts,
        allow_http: cli.allow_http,
        version: cli.version,
        dry_run: cli.dry_run,
        scratch_root: None,
    };

    match package_extension(&options) {
        Ok(PackageOutcome::Preview(preview)) => match preview.to_pretty_json() {
            Ok(json) => {
                println!("{}", "Running in dry-run mode; no files will be written.".yellow());
                println!("{}", "Manifest preview:".bold());
                println!("{json}");
            }
            Err(e) => {
                eprintln!("{}", format!("Error: {e}").red());
                std::process::exit(1);
            }
        },
        Ok(PackageOutcome::Archive { path, entries }) => {
            println!(
                "{} {}",
                "Created package:".green().bold(),
                path.display()
            );
            println!("  - Files: {}", entries.len());
        }
        Err(e) => {
            eprintln!("{}", "Packaging failed!".red().bold());
            eprintln!("{}", format!("Error: {e:#}").red());
            std::process::exit(1);
        }
    }
}
