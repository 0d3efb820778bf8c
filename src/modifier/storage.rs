//! Storage-backend routing modifiers
//!
//! Rewrites image paths so the resizing endpoint reads them from a storage
//! plugin mounted under a virtual folder:
//!
//! - **S3**: `/s3/{bucket}/{path}`
//! - **Azure**: `/azure/{container}/{path}`
//! - **Remote**: `http://host/a.jpg` -> `/remote/host/a.jpg`
//!
//! Every rewritten path is rooted at the application base path.

use std::borrow::Cow;
use std::sync::Arc;

use http::Uri;

use super::Modifier;
use crate::error::{require_non_empty, Result};

/// Root `image_path` under `app_path/prefix/container`
///
/// Leading `/`, `\` and `~` are stripped from `image_path` and backslashes are
/// normalized to `/`.
///
/// ```text
/// modify_path("~/images/a.jpg", "/", "azure", Some("blobs")) -> "/azure/blobs/images/a.jpg"
/// ```
pub fn modify_path(
    image_path: &str,
    app_path: &str,
    prefix: &str,
    container: Option<&str>,
) -> String {
    let normalized = image_path.replace('\\', "/");
    let relative = normalized.trim_start_matches(['/', '~']);

    let mut segments = vec![prefix];
    if let Some(container) = container {
        segments.push(container);
    }
    segments.push(relative);

    join_path(app_path, &segments)
}

/// Rewrite an absolute URL to the remote reader's virtual folder
///
/// Characters outside the URI grammar (spaces, non-ASCII, `<>"{}` and the
/// like) are percent-escaped before parsing, so `http://host/my image.jpg`
/// becomes `/remote/host/my%20image.jpg`. Returns `None` when `source` is not
/// an absolute URL with a host.
pub fn remote_path(source: &str, app_path: &str, prefix: &str) -> Option<String> {
    let uri: Uri = escape_uri(source).parse().ok()?;
    uri.scheme()?;
    let host = uri.host()?;
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_default()
        .trim_start_matches('/');

    Some(join_path(app_path, &[prefix, host, path_and_query]))
}

/// Modifier routing paths through an S3 bucket
///
/// Without a bucket, no bucket segment is added and the image path's own root
/// directory serves as the bucket.
///
/// # Errors
///
/// Returns `InvalidArgument` if `prefix` is empty.
pub fn s3(app_path: &str, prefix: &str, bucket: Option<&str>) -> Result<Modifier> {
    prefixed(app_path, prefix, bucket)
}

/// Modifier routing paths through an Azure blob container
///
/// Without a container, no container segment is added and the image path's
/// own root directory serves as the container.
///
/// # Errors
///
/// Returns `InvalidArgument` if `prefix` is empty.
pub fn azure(app_path: &str, prefix: &str, container: Option<&str>) -> Result<Modifier> {
    prefixed(app_path, prefix, container)
}

/// Modifier routing absolute URLs through the remote reader
///
/// Paths that are not absolute URLs pass through untouched.
///
/// # Errors
///
/// Returns `InvalidArgument` if `prefix` is empty.
pub fn remote(app_path: &str, prefix: &str) -> Result<Modifier> {
    require_non_empty("prefix", prefix)?;
    let app_path = app_path.to_string();
    let prefix = prefix.to_string();

    Ok(Arc::new(move |source: &str| {
        match remote_path(source, &app_path, &prefix) {
            Some(rewritten) => rewritten,
            None => {
                tracing::trace!(source = %source, "Not an absolute URL, leaving path unchanged");
                source.to_string()
            }
        }
    }))
}

fn prefixed(app_path: &str, prefix: &str, container: Option<&str>) -> Result<Modifier> {
    require_non_empty("prefix", prefix)?;
    let app_path = app_path.to_string();
    let prefix = prefix.to_string();
    let container = container.filter(|c| !c.is_empty()).map(str::to_string);

    Ok(Arc::new(move |source: &str| {
        modify_path(source, &app_path, &prefix, container.as_deref())
    }))
}

fn escape_uri(source: &str) -> Cow<'_, str> {
    if source.chars().all(is_uri_char) {
        return Cow::Borrowed(source);
    }

    let mut escaped = String::with_capacity(source.len() + 8);
    let mut buf = [0u8; 4];
    for c in source.chars() {
        if is_uri_char(c) {
            escaped.push(c);
        } else {
            escaped.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    Cow::Owned(escaped)
}

fn is_uri_char(c: char) -> bool {
    c.is_ascii_graphic() && !matches!(c, '"' | '<' | '>' | '\\' | '^' | '`' | '{' | '}')
}

fn join_path(root: &str, segments: &[&str]) -> String {
    let mut joined = root.replace('\\', "/").trim_end_matches('/').to_string();
    for segment in segments {
        let segment = segment.trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        joined.push('/');
        joined.push_str(segment);
    }
    if joined.is_empty() {
        joined.push('/');
    }
    joined
}
