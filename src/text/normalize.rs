use crate::text::segment::{first_grapheme, words};

/// Reduce a display name to its initials token.
///
/// Rules, in order:
/// - whitespace-only (or empty) input is returned unchanged; this is not a success signal.
/// - a single word whose UTF-8 byte length is even is returned whole, uppercased.
/// - otherwise the first grapheme of the first word, followed by the first grapheme of the second
///   word when there is one. Case is left as typed.
pub fn normalize(raw: &str) -> String {
    if raw.trim().is_empty() {
        return raw.to_string();
    }

    let parts = words(raw);
    if parts.len() == 1 && raw.len() % 2 == 0 {
        return raw.to_uppercase();
    }

    parts
        .iter()
        .take(2)
        .filter_map(|w| first_grapheme(w))
        .collect()
}

/// Return `true` when `token` cannot be rendered (empty or whitespace only).
pub fn is_blank(token: &str) -> bool {
    token.trim().is_empty()
}

#[cfg(test)]
#[path = "../../tests/unit/text/normalize.rs"]
mod tests;
