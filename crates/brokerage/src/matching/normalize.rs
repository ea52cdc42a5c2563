/// Canonical comparison form of a person name: lowercase ASCII letters separated by single spaces.
///
/// Digits, punctuation, hyphens and any letter outside `a-z` after lower-casing are dropped
/// rather than replaced, so `O'Brien-Smith` collapses to `obriensmith`.
pub fn normalize_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let letters: String = lowered
        .chars()
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_whitespace())
        .collect();
    letters.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn name_tokens(normalized: &str) -> Vec<&str> {
    normalized.split(' ').filter(|token| !token.is_empty()).collect()
}
