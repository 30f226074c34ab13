//! Trigger classification and script dispatch.
//!
//! The host calls [`ScriptDispatcher::run_load_time_scripts`] exactly once
//! after the first page render and
//! [`ScriptDispatcher::run_navigate_time_scripts`] once after each
//! subsequent in-app navigation, after the new page content is present in
//! the document (scripts may need to observe it). The two calls never
//! overlap by construction of the host lifecycle.

use std::sync::Arc;

use async_trait::async_trait;

use sitekit_core::element::ScriptElement;

use crate::error::{DispatchError, ScriptRunError};
use crate::fetch::ManifestFetch;
use crate::loader::ManifestLoader;

/// Document mutation seam for static injection.
///
/// Passed into each load-time dispatch call so the dispatch policy never
/// touches ambient document state.
pub trait RenderTarget {
    /// Insert a script reference so the document loads and executes it
    /// as part of page construction.
    fn insert_script(&mut self, element: ScriptElement);
}

/// Dynamic load-and-run seam for navigate-time scripts.
///
/// The host supplies the implementation (a JS runtime bridge, a headless
/// browser, ...); this crate ships none.
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    /// Load and execute the script at `src`, resolving once it has run.
    async fn run(&self, src: &str) -> Result<(), ScriptRunError>;
}

/// Dispatches manifest entries by trigger.
///
/// The manifest is fetched fresh on every dispatch call and discarded
/// afterwards. A dispatch cycle aborts on the first invalid entry or
/// failed script; there is no partial-failure recovery.
pub struct ScriptDispatcher {
    loader: ManifestLoader,
    site_root: String,
    runner: Arc<dyn ScriptRunner>,
}

impl ScriptDispatcher {
    /// Create a dispatcher for a site.
    ///
    /// `site_root` is the base path local script names resolve against,
    /// and the directory the manifest is fetched from.
    pub fn new(
        fetch: Arc<dyn ManifestFetch>,
        site_root: &str,
        runner: Arc<dyn ScriptRunner>,
    ) -> Self {
        Self {
            loader: ManifestLoader::new(fetch, site_root),
            site_root: site_root.trim_end_matches('/').to_string(),
            runner,
        }
    }

    /// Statically inject every load-time script, in manifest order.
    ///
    /// Insertion order determines relative execution timing; the
    /// document's own ordering rules for `async`/`defer` govern the rest.
    /// Returns the number of scripts injected.
    pub async fn run_load_time_scripts(
        &self,
        target: &mut dyn RenderTarget,
    ) -> Result<usize, DispatchError> {
        let manifest = self.loader.load().await?;

        let mut injected = 0;
        for entry in manifest.iter().filter(|e| e.runs_on_load()) {
            let element = ScriptElement::from_entry(entry, &self.site_root)?;
            tracing::debug!(src = %element.src, "Injecting load-time script");
            target.insert_script(element);
            injected += 1;
        }

        tracing::info!(count = injected, "Load-time script dispatch complete");
        Ok(injected)
    }

    /// Dynamically execute every navigate-time script, awaited
    /// sequentially in manifest order.
    ///
    /// Each script's load-and-run completes before the next begins.
    /// Returns the number of scripts executed.
    pub async fn run_navigate_time_scripts(&self) -> Result<usize, DispatchError> {
        let manifest = self.loader.load().await?;

        let mut executed = 0;
        for entry in manifest.iter().filter(|e| e.runs_on_navigate()) {
            let src = entry.source()?.resolve(&self.site_root);
            tracing::debug!(src = %src, "Running navigate-time script");
            self.runner
                .run(&src)
                .await
                .map_err(|source| DispatchError::ScriptRun {
                    src: src.clone(),
                    source,
                })?;
            executed += 1;
        }

        tracing::info!(count = executed, "Navigate-time script dispatch complete");
        Ok(executed)
    }
}
