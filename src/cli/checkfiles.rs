use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::warn;

use crate::catalog::store::Catalog;
use crate::cli::{FilterArgs, OutputFormat};

#[derive(Args)]
pub struct CheckfilesArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Directory holding the downloaded images
    #[arg(short, long, required = true)]
    pub directory: PathBuf,

    /// Image file extension, including the dot (e.g. ".png")
    #[arg(short, long)]
    pub extension: Option<String>,
}

#[derive(Serialize)]
struct CheckReport {
    checked: usize,
    missing: Vec<PathBuf>,
}

/// Execute checkfiles subcommand
///
/// # Errors
///
/// Returns an error if the query fails or any selected file is missing.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: CheckfilesArgs,
    catalog: &Catalog,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let selected = args.filters.select(catalog)?;
    let extension = args.extension.as_deref();

    let mut missing = Vec::new();
    for s in &selected {
        let path = s.record.make_path(Some(&args.directory), extension);
        if !path.exists() {
            warn!("Missing file for {}: {}", s.record, path.display());
            missing.push(path);
        }
    }

    match format {
        OutputFormat::Text | OutputFormat::Tsv => {
            for path in &missing {
                println!("{}", path.display());
            }
        }
        OutputFormat::Json => {
            let report = CheckReport {
                checked: selected.len(),
                missing: missing.clone(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if verbose {
        eprintln!(
            "Checked {} files, {} missing",
            selected.len(),
            missing.len()
        );
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "{} of {} files missing under {}",
            missing.len(),
            selected.len(),
            args.directory.display()
        );
    }

    Ok(())
}
