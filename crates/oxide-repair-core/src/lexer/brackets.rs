//! Balanced-parenthesis scanning over tokens.

/// Returns the index of the `)` token that closes the `(` at `open`.
///
/// Returns `None` if `open` is not a `(` token or the group never closes.
#[must_use]
pub fn matching_close(tokens: &[String], open: usize) -> Option<usize> {
    if tokens.get(open).map(String::as_str) != Some("(") {
        return None;
    }
    let mut depth = 0usize;
    for (idx, tok) in tokens.iter().enumerate().skip(open) {
        match tok.as_str() {
            "(" => depth += 1,
            ")" => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}

/// Splits `tokens` on commas that are not nested inside parentheses.
///
/// An empty input yields no groups.
#[must_use]
pub fn split_top_level(tokens: &[String]) -> Vec<&[String]> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (idx, tok) in tokens.iter().enumerate() {
        match tok.as_str() {
            "(" => depth += 1,
            ")" => depth = depth.saturating_sub(1),
            "," if depth == 0 => {
                groups.push(&tokens[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    groups.push(&tokens[start..]);
    groups
}
