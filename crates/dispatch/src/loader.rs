//! Manifest retrieval and shape checking.

use std::sync::Arc;

use sitekit_core::entry::CustomScriptEntry;
use sitekit_core::paths::MANIFEST_FILE;

use crate::error::DispatchError;
use crate::fetch::ManifestFetch;

/// Fetches `custom-scripts.json` from the site root and checks its shape.
///
/// Entries are *not* validated here; source-field validation happens per
/// entry at dispatch time. The manifest is fetched fresh on every call
/// and never cached across triggering events.
pub struct ManifestLoader {
    fetch: Arc<dyn ManifestFetch>,
    manifest_url: String,
}

impl ManifestLoader {
    /// Create a loader for the manifest under `site_root`.
    pub fn new(fetch: Arc<dyn ManifestFetch>, site_root: &str) -> Self {
        let manifest_url = format!("{}/{MANIFEST_FILE}", site_root.trim_end_matches('/'));
        Self {
            fetch,
            manifest_url,
        }
    }

    /// URL this loader requests the manifest from.
    pub fn manifest_url(&self) -> &str {
        &self.manifest_url
    }

    /// Fetch and parse the manifest.
    ///
    /// A missing manifest is an empty one. A manifest that is present
    /// but not a JSON array of entry objects is a hard error.
    pub async fn load(&self) -> Result<Vec<CustomScriptEntry>, DispatchError> {
        let body = match self.fetch.get_json(&self.manifest_url).await? {
            Some(body) => body,
            None => {
                tracing::debug!(url = %self.manifest_url, "No custom-script manifest");
                return Ok(Vec::new());
            }
        };

        if !body.is_array() {
            return Err(DispatchError::ManifestFormat(
                "manifest root is not an array".to_string(),
            ));
        }

        let entries: Vec<CustomScriptEntry> =
            serde_json::from_value(body).map_err(|e| DispatchError::ManifestFormat(e.to_string()))?;

        tracing::debug!(
            url = %self.manifest_url,
            count = entries.len(),
            "Loaded custom-script manifest"
        );
        Ok(entries)
    }
}
