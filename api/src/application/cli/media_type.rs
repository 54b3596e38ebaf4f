use std::path::Path;

pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// Declared media type of a file picked from disk, from its extension.
pub fn media_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => FALLBACK_MEDIA_TYPE,
    }
}
