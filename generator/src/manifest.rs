//! Web app manifest entries for generated icons.
//!
//! Produces the `icons` array a `manifest.json` needs to reference the files
//! written by [`crate::generate::generate_icons`].

use std::collections::HashSet;

use serde::Serialize;

use crate::generate::{GeneratedIcon, icon_file_name};

/// URL path the web app serves the icon directory under.
pub const PUBLIC_ICON_PREFIX: &str = "/icons";

/// One element of a manifest's `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: &'static str,
    pub purpose: &'static str,
}

/// Builds manifest entries for `icons`, one per distinct size in first-seen order.
#[must_use]
pub fn entries(icons: &[GeneratedIcon], public_prefix: &str) -> Vec<ManifestIcon> {
    let prefix = public_prefix.trim_end_matches('/');
    let mut seen = HashSet::new();
    icons
        .iter()
        .filter(|icon| seen.insert(icon.size))
        .map(|icon| ManifestIcon {
            src: format!("{prefix}/{}", icon_file_name(icon.size)),
            sizes: icon.size.to_string(),
            mime_type: "image/png",
            purpose: "any",
        })
        .collect()
}

/// Renders `entries` as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(entries: &[ManifestIcon]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
