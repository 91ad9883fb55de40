//! Zapret geosite CLI
//!
//! Converts the Zapret-Info CSV dump into `geosite.dat` and a plaintext list.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use zapret_geosite::config::{DEFAULT_GEOSITE_FILENAME, DEFAULT_LIST_NAME, LIST_NAME_PLACEHOLDER};
use zapret_geosite::source::DEFAULT_ENCODING;
use zapret_geosite::{build, BuildOptions};

#[derive(Parser, Debug)]
#[command(name = "zapret-geosite")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the list
    #[arg(long, env = "ZAPRET_LIST_NAME", default_value = DEFAULT_LIST_NAME)]
    list_name: String,

    /// Path to the Zapret-Info CSV
    #[arg(long, value_name = "FILE", default_value = "./z-i/dump.csv")]
    input: PathBuf,

    /// Name of the output file
    #[arg(long, default_value = DEFAULT_GEOSITE_FILENAME)]
    geosite_filename: String,

    /// Name of the plaintext output file
    #[arg(long, default_value = LIST_NAME_PLACEHOLDER)]
    plaintext_filename: String,

    /// Output path to the generated files
    #[arg(long, value_name = "DIR", default_value = "./publish")]
    output_dir: PathBuf,

    /// Charset of the input dump
    #[arg(long, env = "ZAPRET_ENCODING", default_value = DEFAULT_ENCODING)]
    encoding: String,

    /// Number of header lines before the first record
    #[arg(long, default_value_t = 1)]
    header_lines: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn options(&self) -> BuildOptions {
        BuildOptions {
            list_name: self.list_name.clone(),
            input: self.input.clone(),
            geosite_filename: self.geosite_filename.clone(),
            plaintext_filename: self.plaintext_filename.clone(),
            output_dir: self.output_dir.clone(),
            encoding: self.encoding.clone(),
            header_lines: self.header_lines,
        }
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(cli.verbose >= 2))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let opts = cli.options();
    let report = build(&opts)
        .with_context(|| format!("Failed to convert {}", opts.input.display()))?;

    tracing::info!(
        rules = report.rules,
        subsumed = report.subsumed,
        entries = report.entries,
        "conversion finished"
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
