// sqlscript-cli/src/main.rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use sqlscript_cli::cli::{dump_tokens, split_file};
use sqlscript_cli::{OutputFormat, ScriptOptions};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "sqlsplit")]
#[command(about = "Split SQL scripts into individual statements", long_about = None)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    options: ScriptOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the statements of a script
    Split {
        /// Script file
        script: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the tokens the scanner sees in a script
    Tokens {
        /// Script file
        script: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn entrypoint() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Split { script, format } => {
            split_file(&script, &cli.options, format, &mut out)?;
        }
        Commands::Tokens { script, format } => {
            dump_tokens(&script, &cli.options, format, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    match entrypoint() {
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
        Ok(_) => ExitCode::SUCCESS,
    }
}
