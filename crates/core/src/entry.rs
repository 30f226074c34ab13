//! Manifest entry shape and trigger classification.
//!
//! Each manifest entry names its source (an external `url` or a local
//! `name`) and a trigger: run at first page load, run after every in-app
//! navigation, or both. Entries deserialize permissively; source-field
//! validation is deferred to dispatch time via
//! [`CustomScriptEntry::source`].

use serde::{Deserialize, Serialize};

use crate::error::ScriptSourceError;
use crate::paths::SCRIPTS_SEGMENT;

/// When a declared script should execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunTrigger {
    /// Once, as part of the first page render.
    #[serde(rename = "on-load")]
    OnLoad,
    /// At first render and again after every in-app navigation.
    #[serde(rename = "on-load-and-navigate")]
    OnLoadAndNavigate,
    /// Only after in-app navigations, never at first render.
    #[serde(rename = "on-navigate")]
    OnNavigate,
}

/// One declared script from the site manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomScriptEntry {
    /// Trigger; absent means on-load only.
    pub run: Option<RunTrigger>,
    /// External script source, used verbatim.
    pub url: Option<String>,
    /// Local script identifier, resolved under the site's
    /// `custom-scripts/` directory.
    pub name: Option<String>,
    /// Script `type` attribute (e.g. `module`), copied through verbatim.
    pub r#type: Option<String>,
    /// `async` attribute. When materialized this defaults to `false`
    /// rather than the platform default of `true` for dynamically
    /// created elements, so an author-set `defer` keeps its meaning.
    pub r#async: Option<bool>,
    /// `defer` attribute, copied through verbatim.
    pub defer: Option<bool>,
    /// Subresource-integrity hash, copied through verbatim. Its presence
    /// forces anonymous cross-origin credentials mode on the element.
    pub integrity: Option<String>,
}

impl CustomScriptEntry {
    /// True when the entry runs as part of the first page render.
    pub fn runs_on_load(&self) -> bool {
        matches!(
            self.run,
            None | Some(RunTrigger::OnLoad) | Some(RunTrigger::OnLoadAndNavigate)
        )
    }

    /// True when the entry runs after an in-app navigation.
    pub fn runs_on_navigate(&self) -> bool {
        matches!(
            self.run,
            Some(RunTrigger::OnNavigate) | Some(RunTrigger::OnLoadAndNavigate)
        )
    }

    /// Validate the source fields and classify the entry's origin.
    ///
    /// Exactly one of `url` / `name` must be set.
    pub fn source(&self) -> Result<ScriptSource<'_>, ScriptSourceError> {
        match (self.url.as_deref(), self.name.as_deref()) {
            (Some(_), Some(_)) => Err(ScriptSourceError::BothUrlAndName),
            (Some(url), None) => Ok(ScriptSource::External(url)),
            (None, Some(name)) => Ok(ScriptSource::Local(name)),
            (None, None) => Err(ScriptSourceError::MissingSource),
        }
    }
}

/// Where a script is served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptSource<'a> {
    /// Absolute or external URL, used verbatim.
    External(&'a str),
    /// Local script name, resolved under `custom-scripts/`.
    Local(&'a str),
}

impl ScriptSource<'_> {
    /// Resolve to the URL a loader should request.
    ///
    /// Local names resolve to `{site_root}/custom-scripts/{name}.js`;
    /// the `.js` suffix is appended only when not already present. A
    /// trailing slash on `site_root` is tolerated.
    pub fn resolve(&self, site_root: &str) -> String {
        match self {
            Self::External(url) => (*url).to_string(),
            Self::Local(name) => {
                let root = site_root.trim_end_matches('/');
                if name.ends_with(".js") {
                    format!("{root}/{SCRIPTS_SEGMENT}/{name}")
                } else {
                    format!("{root}/{SCRIPTS_SEGMENT}/{name}.js")
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
