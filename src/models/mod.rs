//! Data models

pub mod verdict;
pub mod bulk;
pub mod history;
pub mod session;
pub mod user;

pub use verdict::*;
pub use bulk::*;
pub use history::*;
pub use session::*;
pub use user::*;

/// Maximum characters kept when previewing review text in results and history
pub const REVIEW_PREVIEW_CHARS: usize = 100;

/// Truncate review text to the preview length, appending an ellipsis marker
/// when anything was cut off. Counts characters, not bytes.
pub fn truncate_preview(text: &str) -> String {
    let mut chars = text.char_indices();
    match chars.nth(REVIEW_PREVIEW_CHARS) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
