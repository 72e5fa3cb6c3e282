//! First-sentence summarizer.

/// Return the text before the first `.`, trimmed, with a period appended.
///
/// Text without any `.` comes back unchanged, as does text whose first
/// segment is empty (including the empty string and text starting with `.`).
pub fn summarize(text: &str) -> String {
    match text.split_once('.') {
        Some((first, _)) if !first.is_empty() => format!("{}.", first.trim()),
        _ => text.to_string(),
    }
}
