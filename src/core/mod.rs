//! Core data types for the LivDet 2013 database.
//!
//! - [`Protocol`](types::Protocol), [`Group`](types::Group), [`Class`](types::Class):
//!   the fixed enumerations that partition the dataset
//! - [`Record`](record::Record): one sample identifier read from a manifest
//! - [`Selection`](selection::Selection): what a caller asks for in one query parameter
//!
//! ## Dataset
//!
//! | Protocol   | Model             | Res (dpi) | Image size | Live | Fake |
//! |------------|-------------------|-----------|------------|------|------|
//! | Biometrika | FX2000            | 569       | 312x372    | 2000 | 2000 |
//! | Italdata   | ET10              | 500       | 640x480    | 2000 | 2000 |
//! | CrossMatch | L SCAN GUARDIAN   | 500       | 640x480    | 2500 | 2000 |
//! | Swipe      |                   | 96        |            | 2374 | 1979 |
//!
//! Spoofs were produced with gelatine, silicone, play-doh, ecoflex,
//! body double and wood glue.

pub mod record;
pub mod selection;
pub mod types;
