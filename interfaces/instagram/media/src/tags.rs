/// Extracts hashtags from a caption.
///
/// Only whitespace-separated tokens starting with `#` are considered; such a
/// token may chain several tags (`#a#b`). Duplicates are kept.
pub fn hashtags(caption: &str) -> Vec<&str> {
    caption
        .split_whitespace()
        .filter(|token| token.starts_with('#'))
        .flat_map(|token| token.split('#'))
        .filter(|tag| !tag.is_empty())
        .collect()
}
