//! HTML rendering helpers
//!
//! Turns builder output into values a page template can embed directly.

use crate::builder::ImageUrlBuilder;
use crate::constants::{APP_RELATIVE_MARKER, DEFAULT_APP_VIRTUAL_PATH};
use crate::error::{require_non_empty, Result};
use crate::url::ImageUrl;

/// Resolve an app-relative (`~/`) path against the application base path
///
/// Any other path is returned unchanged.
pub fn resolve_app_relative(path: &str, app_path: &str) -> String {
    match path.strip_prefix(APP_RELATIVE_MARKER) {
        Some(rest) => format!("{}/{}", app_path.trim_end_matches('/'), rest),
        None => path.to_string(),
    }
}

/// Resolve `path` and build it with `builder`
pub fn image_url(path: &str, builder: &ImageUrlBuilder) -> Result<ImageUrl> {
    let resolved = resolve_app_relative(path, builder.app_virtual_path());
    builder.build_url(&resolved)
}

/// Render a self-closing `<img>` tag
///
/// `src` is resolved against the default base path when app-relative.
/// Attribute values are HTML-escaped; `alt` is always emitted.
///
/// # Errors
///
/// Returns `InvalidArgument` if `src` is empty.
pub fn image_tag(src: &str, alt: &str, attributes: &[(&str, &str)]) -> Result<String> {
    require_non_empty("src", src)?;

    let src = resolve_app_relative(src, DEFAULT_APP_VIRTUAL_PATH);
    let mut tag = format!(
        "<img src=\"{}\" alt=\"{}\"",
        escape_attribute(&src),
        escape_attribute(alt)
    );
    for (name, value) in attributes {
        if name.is_empty() || name.eq_ignore_ascii_case("src") || name.eq_ignore_ascii_case("alt")
        {
            continue;
        }
        tag.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
    }
    tag.push_str(" />");
    Ok(tag)
}

/// Build `src` with `builder` and render the result as an `<img>` tag
pub fn build_image_tag(
    src: &str,
    builder: &ImageUrlBuilder,
    alt: &str,
    attributes: &[(&str, &str)],
) -> Result<String> {
    let resolved = resolve_app_relative(src, builder.app_virtual_path());
    let url = builder.build(&resolved)?;
    image_tag(&url, alt, attributes)
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
