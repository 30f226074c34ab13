//! Entry-level validation errors.

/// A manifest entry declares an invalid combination of source fields.
///
/// Raised at dispatch time, not at parse time; see
/// [`CustomScriptEntry::source`](crate::entry::CustomScriptEntry::source).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScriptSourceError {
    /// Both `url` and `name` are set on the same entry.
    #[error("Custom script cannot have both url and name")]
    BothUrlAndName,

    /// Neither `url` nor `name` is set.
    #[error("Custom script has neither a url nor a name property")]
    MissingSource,
}
