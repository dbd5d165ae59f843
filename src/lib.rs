//! # livdet2013
//!
//! Metadata accessor for the LivDet 2013 Fingerprint Liveness Detection
//! Competition database.
//!
//! The database holds live and fake fingerprint images from four capture
//! devices. This crate does not ship or decode any images: the raw data must be
//! obtained from the competition organisers. It only indexes the manifest files
//! that list which samples belong to each protocol (capture device), group
//! (train/test) and class (live/spoof).
//!
//! ## Example
//!
//! ```rust,no_run
//! use livdet2013::{Catalog, Selection};
//! use std::path::Path;
//!
//! // Directory holding <protocol>/<group>/<class>.txt manifests
//! let catalog = Catalog::with_root("/data/livdet2013/manifests");
//! let records = catalog.query("Biometrika", "test", Selection::all()).unwrap();
//!
//! for record in records {
//!     let image = record.make_path(Some(Path::new("/data/livdet2013")), Some(".png"));
//!     println!("{}", image.display());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Root-bound catalog and the query operation
//! - [`core`]: Enumerations, records and selections
//! - [`parsing`]: Manifest file reader
//! - [`cli`]: Command-line interface implementation
//!
//! ## Reference
//!
//! L. Ghiani, D. Yambay, V. Mura, S. Tocco, G.L. Marcialis, F. Roli, and
//! S. Schuckers, *LivDet 2013 - Fingerprint Liveness Detection Competition
//! 2013*, 6th IAPR/IEEE Int. Conf. on Biometrics, June 4-7, 2013, Madrid.

pub mod catalog;
pub mod cli;
pub mod core;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::catalog::store::{Catalog, CatalogError, Manifest};
pub use crate::core::record::Record;
pub use crate::core::selection::Selection;
pub use crate::core::types::*;
