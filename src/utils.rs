// Utility functions
use chrono::{DateTime, Utc};

/// Appends a `v=<millis>` parameter so intermediaries cannot serve a stale copy.
pub fn cache_bust_url(url: &str, now: DateTime<Utc>) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{}{}v={}", url, sep, now.timestamp_millis())
}

/// Formats a count with ko-KR digit grouping (1,234,567).
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncates to at most `max` characters without splitting a code point.
pub fn preview(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
