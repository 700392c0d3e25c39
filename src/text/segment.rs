use icu_segmenter::GraphemeClusterSegmenter;

/// Split `text` into user-perceived characters (extended grapheme clusters).
pub fn graphemes(text: &str) -> Vec<&str> {
    let breaks: Vec<usize> = GraphemeClusterSegmenter::new().segment_str(text).collect();
    breaks
        .windows(2)
        .map(|w| &text[w[0]..w[1]])
        .filter(|g| !g.is_empty())
        .collect()
}

/// First grapheme of `text`, if any.
pub fn first_grapheme(text: &str) -> Option<&str> {
    graphemes(text).into_iter().next()
}

/// Split `text` into whitespace-delimited words without cutting through a grapheme.
///
/// A grapheme is a separator only when every scalar in it is whitespace, so a space that carries a
/// combining mark stays part of its word.
pub fn words(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;
    let mut offset = 0usize;
    for g in graphemes(text) {
        let is_space = g.chars().all(char::is_whitespace);
        match (is_space, start) {
            (true, Some(s)) => {
                out.push(&text[s..offset]);
                start = None;
            }
            (false, None) => start = Some(offset),
            _ => {}
        }
        offset += g.len();
    }
    if let Some(s) = start {
        out.push(&text[s..]);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/text/segment.rs"]
mod tests;
