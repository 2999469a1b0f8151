//! Relative output path derivation for fetched documents.

use std::path::{Component, Path};

use crate::parser::SectionMap;

/// Section used when a document stem is missing from the docs map.
pub const FALLBACK_SECTION: &str = "misc";

/// Derives the output path of `url`, relative to its source directory.
///
/// Without a section map the URL minus `strip_prefix` is used as a path, with
/// repeated `/` and `.` segments collapsed. With a map the path is flattened to
/// `<section>/<stem>.md`, where the section comes from the map or falls back
/// to [`FALLBACK_SECTION`].
///
/// ```
/// use std::collections::HashMap;
/// use docs_scraper_core::derive_path;
///
/// assert_eq!(
///     derive_path("https://host/docs/en/foo/bar.md", "https://host/docs/en/", None),
///     "foo/bar.md"
/// );
///
/// let map = HashMap::from([("bar".to_string(), "guides".to_string())]);
/// assert_eq!(
///     derive_path("https://host/x/bar.md", "https://host/x/", Some(&map)),
///     "guides/bar.md"
/// );
/// ```
#[must_use]
pub fn derive_path(url: &str, strip_prefix: &str, section_map: Option<&SectionMap>) -> String {
    let rel = collapse_segments(url.strip_prefix(strip_prefix).unwrap_or(url));

    let Some(map) = section_map else {
        return rel;
    };

    let stem = Path::new(&rel)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let section = map.get(&stem).map_or(FALLBACK_SECTION, String::as_str);
    format!("{section}/{stem}.md")
}

/// Drops empty and `.` segments; a leading `/` and any `..` are kept.
fn collapse_segments(rel: &str) -> String {
    let joined = rel
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/");
    if rel.starts_with('/') {
        format!("/{joined}")
    } else {
        joined
    }
}

/// Returns true when `rel` stays inside the directory it is joined onto.
///
/// Rejects empty paths, absolute paths, and any `..` component.
#[must_use]
pub fn is_contained(rel: &str) -> bool {
    let path = Path::new(rel);
    let mut has_normal = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => has_normal = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    has_normal
}
