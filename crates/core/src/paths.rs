//! Well-known site paths for custom-script resolution.

/// File name of the custom-script manifest, served from the site root.
pub const MANIFEST_FILE: &str = "custom-scripts.json";

/// Path segment under the site root that local scripts are served from.
pub const SCRIPTS_SEGMENT: &str = "custom-scripts";
