//! Core data model for docs-site custom scripts.
//!
//! A site declares custom scripts in a JSON manifest at its root; each
//! entry names a script source and when it should run. This crate holds
//! the entry shape, trigger classification, source validation/resolution,
//! and the script-element descriptor used for static injection. No I/O
//! lives here; fetching and dispatch are in `sitekit-dispatch`.

pub mod element;
pub mod entry;
pub mod error;
pub mod paths;
