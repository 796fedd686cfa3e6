//! Tenant API: record types, the OData client and web UI deep links.

pub mod client;
pub mod types;

pub use client::{CpiClient, DataSource};
pub use types::{ArtifactKind, ContentPackage, IntegrationArtifact};

use url::Url;

/// Web UI link for a content package, or `None` without a configured web UI.
pub fn package_web_url(webui: Option<&Url>, package_id: &str) -> Option<Url> {
    deep_link(webui, &["shell", "design", "contentpackage", package_id])
}

/// Web UI link for an artifact inside its package.
pub fn artifact_web_url(
    webui: Option<&Url>,
    package_id: &str,
    kind: ArtifactKind,
    artifact_id: &str,
) -> Option<Url> {
    deep_link(
        webui,
        &[
            "shell",
            "design",
            "contentpackage",
            package_id,
            kind.web_segment(),
            artifact_id,
        ],
    )
}

fn deep_link(webui: Option<&Url>, segments: &[&str]) -> Option<Url> {
    let mut url = webui?.clone();
    {
        let mut path = url.path_segments_mut().ok()?;
        path.pop_if_empty();
        path.extend(segments);
    }
    url.set_query(None);
    url.set_fragment(None);
    Some(url)
}
