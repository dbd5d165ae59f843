//! Command-line interface for livdet2013.
//!
//! Available commands:
//!
//! - **dumplist**: Print the sample paths selected by a query
//! - **checkfiles**: Report selected samples whose image file is missing
//! - **info**: Show the enumerations and the manifests under the root
//!
//! ## Usage
//!
//! ```text
//! # Every sample, one identifier per line
//! livdet2013 dumplist
//!
//! # Live training samples from two devices, as image paths
//! livdet2013 dumplist -p Biometrika -p Swipe -g train -c live \
//!     --directory /data/livdet2013 --extension .png
//!
//! # Check that the downloaded images are complete
//! livdet2013 checkfiles --directory /data/livdet2013 --extension .png
//!
//! # Use a different manifest directory
//! livdet2013 --root ./manifests info --format json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use crate::catalog::store::{Catalog, CatalogError, Manifest};
use crate::core::record::Record;

pub mod checkfiles;
pub mod dumplist;
pub mod info;

#[derive(Parser)]
#[command(name = "livdet2013")]
#[command(version)]
#[command(about = "Query the LivDet 2013 fingerprint liveness database manifests")]
#[command(
    long_about = "livdet2013 lists the samples of the LivDet 2013 Fingerprint Liveness Detection database.\n\nSamples are selected by protocol (capture device), group (train/test) and class (live/spoof). The image data itself is not included and must be downloaded separately."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Manifest directory (defaults to $LIVDET2013_ROOT, then the bundled data)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,
}

impl Cli {
    /// Catalog bound to `--root` when given, otherwise the default location
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        match &self.root {
            Some(root) => Catalog::with_root(root.clone()),
            None => Catalog::new(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the samples selected by a query
    Dumplist(dumplist::DumplistArgs),

    /// List selected samples whose image file does not exist
    Checkfiles(checkfiles::CheckfilesArgs),

    /// Show enumerations and manifest statistics
    Info,
}

/// Query filters shared by the sample-listing commands.
///
/// Each flag may be repeated or given a comma-separated list. Omitting a flag
/// selects every value.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Capture device (Biometrika, CrossMatch, Italdata, Swipe)
    #[arg(short, long = "protocol", value_delimiter = ',')]
    pub protocols: Vec<String>,

    /// Data split (train, test)
    #[arg(short, long = "group", value_delimiter = ',')]
    pub groups: Vec<String>,

    /// Sample class (live, spoof)
    #[arg(short, long = "class", value_delimiter = ',')]
    pub classes: Vec<String>,
}

impl FilterArgs {
    /// Run the query, keeping track of which manifest each record came from
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for invalid filter values or unreadable manifests.
    pub fn select(&self, catalog: &Catalog) -> Result<Vec<SelectedRecord>, CatalogError> {
        let manifests = catalog.manifests(
            self.protocols.clone(),
            self.groups.clone(),
            self.classes.clone(),
        )?;

        let mut selected = Vec::new();
        for manifest in manifests {
            for record in catalog.read_manifest(&manifest)? {
                selected.push(SelectedRecord { manifest, record });
            }
        }
        Ok(selected)
    }
}

/// A record together with the manifest that listed it
#[derive(Debug, Clone, Serialize)]
pub struct SelectedRecord {
    #[serde(flatten)]
    pub manifest: Manifest,
    #[serde(flatten)]
    pub record: Record,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
