//! Display-title derivation from Markdown bodies.

use crate::ArticleId;

/// Derive a display title for an article.
///
/// Returns the text of the first ATX heading line (leading `#` and spaces
/// stripped), or the decimal ID when the body has no heading.
pub fn derive_title(body: &str, id: ArticleId) -> String {
    for line in body.lines() {
        if line.starts_with('#') {
            return line.trim_start_matches(['#', ' ']).to_string();
        }
    }
    id.to_string()
}
