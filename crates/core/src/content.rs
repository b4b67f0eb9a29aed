//! Derived metrics over chapter and episode content.

/// Word count recorded for a piece of content.
///
/// The count is the number of Unicode scalar values in the text, which is the
/// meaningful measure for CJK scripts where words are not space-separated.
/// Missing or whitespace-only content counts as zero. Saturates at `i32::MAX`.
pub fn word_count(content: Option<&str>) -> i32 {
    match content {
        Some(text) if !text.trim().is_empty() => {
            i32::try_from(text.chars().count()).unwrap_or(i32::MAX)
        }
        _ => 0,
    }
}
