//! Script-element descriptor for static injection.
//!
//! [`ScriptElement`] is a fully resolved script reference: every
//! attribute decision is made when it is built, so render targets can
//! copy fields through without consulting the original manifest entry.

use crate::entry::CustomScriptEntry;
use crate::error::ScriptSourceError;

/// Cross-origin credentials mode carried on a script element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossOrigin {
    /// Request without credentials (`crossorigin="anonymous"`).
    Anonymous,
}

impl CrossOrigin {
    /// Attribute value as it appears in markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
        }
    }
}

/// A resolved script reference, ready to insert into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptElement {
    /// Resolved source URL.
    pub src: String,
    /// `type` attribute, when the entry declared one.
    pub r#type: Option<String>,
    /// Always explicit: the entry's value, or `false` when unset.
    pub r#async: bool,
    /// `defer` attribute, when the entry declared one.
    pub defer: Option<bool>,
    /// Subresource-integrity hash, when the entry declared one.
    pub integrity: Option<String>,
    /// `anonymous` whenever `integrity` is present, otherwise `None`.
    pub cross_origin: Option<CrossOrigin>,
}

impl ScriptElement {
    /// Build a descriptor from a manifest entry.
    ///
    /// Fails when the entry does not have exactly one of `url` / `name`.
    pub fn from_entry(
        entry: &CustomScriptEntry,
        site_root: &str,
    ) -> Result<Self, ScriptSourceError> {
        let src = entry.source()?.resolve(site_root);
        Ok(Self {
            src,
            r#type: entry.r#type.clone(),
            r#async: entry.r#async.unwrap_or(false),
            defer: entry.defer,
            integrity: entry.integrity.clone(),
            cross_origin: entry.integrity.as_ref().map(|_| CrossOrigin::Anonymous),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
