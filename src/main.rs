//! simdoc - Render JSON document descriptions to Markdown

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use simdoc::{Doc, write_markdown};

#[derive(Parser)]
#[command(name = "simdoc")]
#[command(version, about = "Render structured documents to Markdown", long_about = None)]
#[command(after_help = "EXAMPLES:
    simdoc report.json               Print Markdown to stdout
    simdoc report.json -o report.md  Write Markdown to a file
    simdoc - < report.json           Read the description from stdin")]
struct Cli {
    /// JSON document description ("-" for stdin)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Output Markdown file (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> simdoc::Result<()> {
    let doc = if cli.input == "-" {
        Doc::from_json_reader(io::stdin().lock())?
    } else {
        Doc::from_json_reader(BufReader::new(File::open(&cli.input)?))?
    };
    tracing::debug!(input = %cli.input, blocks = doc.len(), "loaded document");

    match &cli.output {
        Some(path) => {
            let written = doc.save(path)?;
            if !cli.quiet {
                println!("Wrote {} ({} blocks)", written.display(), doc.len());
            }
        }
        None => {
            let markdown = doc.to_markdown()?;
            write_markdown(&markdown, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
