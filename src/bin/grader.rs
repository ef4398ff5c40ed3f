//! Command-line checker: grades an HTML document against a checks file and
//! prints the JSON report to stdout.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use html_grader::{checks, loader, report, Error, Result};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the checks file (JSON array of CSS selectors)
    #[arg(short, long, value_name = "check_file", default_value = "checks.json")]
    checks: PathBuf,

    /// Path to a local HTML document
    #[arg(short, long, value_name = "html_file")]
    file: Option<PathBuf>,

    /// URL to fetch the HTML document from
    #[arg(short, long)]
    url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the JSON report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::NotFound(path)) => {
            println!("{} does not exist. Exiting.", path.display());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    // With no document source there is nothing to grade.
    let html = if let Some(path) = &cli.file {
        loader::load_file(path)?
    } else if let Some(url) = &cli.url {
        loader::fetch_url(url).await?
    } else {
        return Ok(());
    };

    let selectors = checks::load_checks(&cli.checks)?;
    let result = html_grader::check_html(&html, &selectors);
    println!("{}", report::render_json(&result));
    Ok(())
}
