//! Manifest catalog and query operation.
//!
//! The catalog is bound to a root directory holding one manifest per
//! protocol/group/class combination:
//!
//! ```text
//! <root>/
//!   Biometrika/train/live.txt
//!   Biometrika/train/spoof.txt
//!   Biometrika/test/live.txt
//!   ...
//!   Swipe/test/spoof.txt
//! ```
//!
//! `Catalog::new()` reads `$LIVDET2013_ROOT`, falling back to the package's
//! `data/` directory. Neither holds manifests until they are installed there.
//!
//! ## Example
//!
//! ```rust,no_run
//! use livdet2013::{Catalog, Selection};
//!
//! // The manifests ship separately; point the catalog at them
//! let catalog = Catalog::with_root("/data/livdet2013/manifests");
//!
//! // Every live training sample across all devices
//! let records = catalog.query(Selection::all(), "train", "live").unwrap();
//!
//! // Several values per parameter
//! let records = catalog.query(["Swipe", "Italdata"], ["train", "test"], "spoof").unwrap();
//! for record in &records {
//!     println!("{}", record.identifier);
//! }
//! ```

pub mod store;
