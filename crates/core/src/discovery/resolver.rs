//! Turns provider locations into [`SearchRoot`]s.

use crate::error::{Result, TagscanError};
use std::path::PathBuf;
use tagscan_api::{SearchPathProvider, SearchRoot};
use tracing::debug;
use url::Url;

pub struct PathResolver<'a> {
    provider: &'a dyn SearchPathProvider,
}

impl<'a> PathResolver<'a> {
    pub fn new(provider: &'a dyn SearchPathProvider) -> Self {
        Self { provider }
    }

    /// Resolve every root registered for `namespace`.
    ///
    /// All locations are parsed before anything is returned, so an
    /// unsupported scheme anywhere fails the call before scanning starts.
    pub fn resolve(&self, namespace: &str) -> Result<Vec<SearchRoot>> {
        let locations = self.provider.locations(namespace)?;
        debug!(
            "Provider {} returned {} locations for '{}'",
            self.provider.name(),
            locations.len(),
            namespace
        );

        locations
            .iter()
            .map(|location| parse_location(namespace, location))
            .collect()
    }
}

/// Parse one location string.
///
/// Accepted forms:
/// - a plain filesystem path (directory root)
/// - `file:` URI (directory root)
/// - `jar:<file-url>!/<inner>` URI (archive root)
pub fn parse_location(namespace: &str, location: &str) -> Result<SearchRoot> {
    let url = match Url::parse(location) {
        Ok(url) if url.scheme().len() > 1 => url,
        // Relative paths and Windows drive letters are plain paths
        _ => return Ok(SearchRoot::Directory(PathBuf::from(location))),
    };

    match url.scheme() {
        "file" => Ok(SearchRoot::Directory(file_url_to_path(namespace, location, &url)?)),
        "jar" => parse_jar_location(namespace, location, url.path()),
        scheme => Err(TagscanError::UnsupportedRootScheme {
            namespace: namespace.to_string(),
            location: location.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

fn parse_jar_location(namespace: &str, location: &str, body: &str) -> Result<SearchRoot> {
    let Some((outer, inner)) = body.split_once('!') else {
        return Err(TagscanError::InvalidLocation {
            namespace: namespace.to_string(),
            location: location.to_string(),
            reason: "missing `!` separator".to_string(),
        });
    };

    let outer_url = Url::parse(outer).map_err(|e| TagscanError::InvalidLocation {
        namespace: namespace.to_string(),
        location: location.to_string(),
        reason: format!("archive URL '{outer}' does not parse: {e}"),
    })?;
    if outer_url.scheme() != "file" {
        return Err(TagscanError::UnsupportedRootScheme {
            namespace: namespace.to_string(),
            location: location.to_string(),
            scheme: format!("jar:{}", outer_url.scheme()),
        });
    }

    Ok(SearchRoot::Archive {
        archive: file_url_to_path(namespace, location, &outer_url)?,
        inner: inner.trim_matches('/').to_string(),
    })
}

fn file_url_to_path(namespace: &str, location: &str, url: &Url) -> Result<PathBuf> {
    url.to_file_path()
        .map_err(|_| TagscanError::InvalidLocation {
            namespace: namespace.to_string(),
            location: location.to_string(),
            reason: "not a local file path".to_string(),
        })
}
