//! String utilities for the domain layer.

/// Normalize a question into a lookup key.
///
/// Trims, lowercases, then strips any trailing run of whitespace and `?`.
pub fn normalize_question(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .trim_end_matches(|c: char| c == '?' || c.is_whitespace())
        .to_string()
}

/// Normalize a repository key (lowercase, trimmed).
pub fn normalize_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Deterministic 32-bit string hash.
///
/// Polynomial (x31) over UTF-16 code units with wrapping arithmetic, so the
/// value is identical across runs, builds and platforms.
pub fn stable_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
