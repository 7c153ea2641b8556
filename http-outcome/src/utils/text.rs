//! Text processing utilities

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Best-effort cleanup of an error body before it is decoded.
///
/// Strips a leading byte order mark and surrounding whitespace. Escapes such
/// as `\u4e2d` inside JSON strings are left for the JSON decoder.
pub fn normalize_body(body: &str) -> &str {
    body.trim_start_matches(BYTE_ORDER_MARK).trim()
}

/// Truncate text to at most `max_chars` characters
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}... (truncated)", &text[..idx]),
        None => text.to_string(),
    }
}
