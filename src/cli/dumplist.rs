use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::catalog::store::Catalog;
use crate::cli::{FilterArgs, OutputFormat, SelectedRecord};

#[derive(Args)]
pub struct DumplistArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    /// Directory prepended to every sample path
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Extension appended to every sample path, including the dot (e.g. ".png")
    #[arg(short, long)]
    pub extension: Option<String>,
}

#[derive(Serialize)]
struct DumpEntry<'a> {
    #[serde(flatten)]
    selected: &'a SelectedRecord,
    path: PathBuf,
}

/// Execute dumplist subcommand
///
/// # Errors
///
/// Returns an error if a filter value is invalid or a manifest cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(
    args: DumplistArgs,
    catalog: &Catalog,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let selected = args.filters.select(catalog)?;

    if verbose {
        eprintln!(
            "Selected {} samples from {}",
            selected.len(),
            catalog.root_location().display()
        );
    }

    let directory = args.directory.as_deref();
    let extension = args.extension.as_deref();

    match format {
        OutputFormat::Text => {
            for s in &selected {
                println!("{}", s.record.make_path(directory, extension).display());
            }
        }
        OutputFormat::Json => {
            let entries: Vec<_> = selected
                .iter()
                .map(|s| DumpEntry {
                    selected: s,
                    path: s.record.make_path(directory, extension),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Tsv => {
            println!("protocol\tgroup\tclass\tidentifier\tpath");
            for s in &selected {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    s.manifest.protocol,
                    s.manifest.group,
                    s.manifest.class,
                    s.record.identifier,
                    s.record.make_path(directory, extension).display()
                );
            }
        }
    }

    Ok(())
}
