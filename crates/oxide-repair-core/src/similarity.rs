//! Approximate string similarity on a 0–100 scale.

/// Returns the InDel similarity of `a` and `b`, scaled to 0–100.
///
/// Only insertions and deletions count, so a substitution costs 2:
/// `100 * (1 - indel(a, b) / (len(a) + len(b)))`. Identical strings score
/// 100, including two empty strings.
#[must_use]
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    rapidfuzz::fuzz::ratio(a.chars(), b.chars()) * 100.0
}

/// Picks the highest-scoring candidate for `needle`.
///
/// Candidates are `(group, value)` pairs scored on `value`. Only a strictly
/// higher score replaces the current best, so ties go to the first candidate
/// seen; a candidate scoring 0 is never selected.
pub fn best_match<'a, I>(needle: &str, candidates: I) -> Option<(&'a str, &'a str, f64)>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut best: Option<(&str, &str, f64)> = None;
    for (group, value) in candidates {
        let score = ratio(needle, value);
        if score > best.map_or(0.0, |(_, _, s)| s) {
            best = Some((group, value, score));
        }
    }
    best
}
