//! File extension rules for image pathnames.

use std::sync::OnceLock;

use regex::Regex;

fn image_extension_regex() -> &'static Regex {
    static IMAGE_EXT: OnceLock<Regex> = OnceLock::new();
    IMAGE_EXT.get_or_init(|| Regex::new(r"(?i)\.(jpg|jpeg|png|gif|webp)$").expect("Invalid regex"))
}

/// Returns true if `path` ends with a known image extension, ignoring case.
#[must_use]
pub fn has_image_extension(path: &str) -> bool {
    image_extension_regex().is_match(path)
}

/// Infers the MIME type to upload `path` with.
///
/// Unknown extensions fall back to `image/jpeg`.
#[must_use]
pub fn content_type_for_path(path: &str) -> &'static str {
    let ext = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/jpeg",
    }
}
