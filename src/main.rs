use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use semver_int::{ConfigFile, SemverIntConverter, encode_version_with};

#[derive(Parser)]
#[command(name = "semver-int")]
#[command(about = "Encode semantic versions as fixed-width, sortable integers", long_about = None)]
#[command(version)]
struct Cli {
    /// File with one version per line (reads stdin if not provided)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// TOML configuration file (replaces user and local overrides)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Suppress overflow and precision-loss warnings
    #[arg(short, long)]
    quiet: bool,

    /// Exit nonzero when any version encoded with warnings
    #[arg(short, long)]
    strict: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => ConfigFile::load_from_file(path)?,
        None => ConfigFile::load_with_overrides(),
    };
    let converter = SemverIntConverter::new(file_config.into_config()?);

    let input = match &cli.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut had_warnings = false;
    for line in input.lines() {
        let version = line.trim();
        if version.is_empty() {
            continue;
        }

        let result = encode_version_with(&converter, version)?;
        println!("{}", result.version_str);

        if !result.errs.is_empty() {
            had_warnings = true;
            if !cli.quiet {
                for err in &result.errs {
                    eprintln!("warning: {}: {}", version, err);
                }
            }
        }
    }

    if cli.strict && had_warnings {
        std::process::exit(1);
    }
    Ok(())
}
