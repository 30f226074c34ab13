//! Dispatch-cycle error taxonomy.
//!
//! A missing manifest is not represented here: the loader maps it to an
//! empty entry list. Everything else aborts the dispatch cycle and is
//! surfaced to the caller unchanged; there is no retry and no per-entry
//! error collection.

use sitekit_core::error::ScriptSourceError;

use crate::fetch::FetchError;

/// A navigate-time script failed to load or run.
///
/// Produced by host [`ScriptRunner`](crate::dispatcher::ScriptRunner)
/// implementations; the message is whatever the script runtime reported.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ScriptRunError(pub String);

/// Errors that abort a dispatch cycle.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The manifest fetch failed (transport error or non-404 HTTP failure).
    #[error("Manifest fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The manifest exists but is not an array of entry objects.
    #[error("Custom script manifest is malformed: {0}")]
    ManifestFormat(String),

    /// An entry has zero or two of `url` / `name`.
    #[error(transparent)]
    Source(#[from] ScriptSourceError),

    /// A navigate-time script failed; later entries were not attempted.
    #[error("Navigate-time script {src} failed: {source}")]
    ScriptRun {
        /// Resolved source URL of the failing script.
        src: String,
        #[source]
        source: ScriptRunError,
    },
}
