//! Readers for the plain-text manifest files.
//!
//! A manifest lists one sample identifier per line. There is no header and no
//! delimiter beyond the newline. Surrounding whitespace is stripped and blank
//! lines are ignored.
//!
//! ```rust
//! use livdet2013::parsing::manifest::parse_manifest_text;
//!
//! let records = parse_manifest_text("001_1\n\n002_1\n");
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].identifier, "002_1");
//! ```

pub mod manifest;
