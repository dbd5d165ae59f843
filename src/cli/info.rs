use std::path::PathBuf;

use serde::Serialize;

use crate::catalog::store::{Catalog, CatalogError, Manifest};
use crate::cli::OutputFormat;
use crate::core::selection::Selection;
use crate::core::types::{CLASSES, GROUPS, PROTOCOLS};

#[derive(Serialize)]
struct ManifestInfo {
    #[serde(flatten)]
    manifest: Manifest,
    path: PathBuf,
    /// `None` when the manifest file does not exist
    records: Option<usize>,
}

#[derive(Serialize)]
struct CatalogInfo {
    root: PathBuf,
    protocols: &'static [&'static str],
    groups: &'static [&'static str],
    classes: &'static [&'static str],
    manifests: Vec<ManifestInfo>,
}

fn collect(catalog: &Catalog) -> Result<CatalogInfo, CatalogError> {
    let mut manifests = Vec::new();
    for manifest in catalog.manifests(Selection::all(), Selection::all(), Selection::all())? {
        let records = match catalog.read_manifest(&manifest) {
            Ok(records) => Some(records.len()),
            Err(CatalogError::ResourceNotFound { .. }) => None,
            Err(e) => return Err(e),
        };
        manifests.push(ManifestInfo {
            manifest,
            path: manifest.path(catalog.root_location()),
            records,
        });
    }

    Ok(CatalogInfo {
        root: catalog.root_location().to_path_buf(),
        protocols: &PROTOCOLS,
        groups: &GROUPS,
        classes: &CLASSES,
        manifests,
    })
}

/// Execute info subcommand
///
/// # Errors
///
/// Returns an error if an existing manifest cannot be read.
pub fn run(catalog: &Catalog, format: OutputFormat) -> anyhow::Result<()> {
    let info = collect(catalog)?;

    match format {
        OutputFormat::Text => {
            println!("Root:      {}", info.root.display());
            println!("Protocols: {}", info.protocols.join(", "));
            println!("Groups:    {}", info.groups.join(", "));
            println!("Classes:   {}", info.classes.join(", "));
            println!();
            println!(
                "{:<12} {:<6} {:<6} {:>8}",
                "Protocol", "Group", "Class", "Records"
            );
            println!("{}", "-".repeat(35));

            let mut total = 0;
            for m in &info.manifests {
                let count = match m.records {
                    Some(n) => {
                        total += n;
                        n.to_string()
                    }
                    None => "missing".to_string(),
                };
                println!(
                    "{:<12} {:<6} {:<6} {:>8}",
                    m.manifest.protocol.as_str(),
                    m.manifest.group.as_str(),
                    m.manifest.class.as_str(),
                    count
                );
            }
            println!("{}", "-".repeat(35));
            println!("{:<26} {:>8}", "Total", total);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        OutputFormat::Tsv => {
            println!("protocol\tgroup\tclass\tpath\trecords");
            for m in &info.manifests {
                let count = m.records.map_or_else(|| "missing".to_string(), |n| n.to_string());
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    m.manifest.protocol,
                    m.manifest.group,
                    m.manifest.class,
                    m.path.display(),
                    count
                );
            }
        }
    }

    Ok(())
}
