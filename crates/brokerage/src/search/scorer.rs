pub const EXACT_SCORE: u32 = 100;
pub const PREFIX_SCORE: u32 = 80;
pub const CONTAINS_SCORE: u32 = 60;
pub const SUBSEQUENCE_STEP: u32 = 10;

/// Case-insensitive ranking signal for `query` against `target`; `0` means no match.
///
/// Exact matches outrank prefixes, prefixes outrank substrings, and substrings outrank
/// in-order subsequences, which earn [`SUBSEQUENCE_STEP`] per matched character. An empty
/// query is not special-cased; callers enforce a minimum query length instead.
pub fn fuzzy_score(query: &str, target: &str) -> u32 {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    if target == query {
        return EXACT_SCORE;
    }
    if target.starts_with(&query) {
        return PREFIX_SCORE;
    }
    if target.contains(&query) {
        return CONTAINS_SCORE;
    }

    let mut pending = query.chars().peekable();
    let mut score = 0;
    for ch in target.chars() {
        match pending.peek() {
            Some(&next) if next == ch => {
                score += SUBSEQUENCE_STEP;
                pending.next();
            }
            Some(_) => {}
            None => break,
        }
    }

    if pending.peek().is_none() {
        score
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_case_insensitive() {
        assert_eq!(fuzzy_score("Jane", "jane"), EXACT_SCORE);
        assert_eq!(fuzzy_score("JANE DOE", "Jane Doe"), EXACT_SCORE);
    }

    #[test]
    fn prefix_and_substring_tiers() {
        assert_eq!(fuzzy_score("Jan", "Jane Doe"), PREFIX_SCORE);
        assert_eq!(fuzzy_score("Doe", "Jane Doe"), CONTAINS_SCORE);
        assert_eq!(fuzzy_score("ne d", "Jane Doe"), CONTAINS_SCORE);
    }

    #[test]
    fn subsequence_scores_ten_per_character() {
        assert_eq!(fuzzy_score("jd", "Jane Doe"), 20);
        assert_eq!(fuzzy_score("jnde", "Jane Doe"), 40);
        assert_eq!(fuzzy_score("Mkt", "Marketing Center"), 30);
    }

    #[test]
    fn out_of_order_characters_do_not_match() {
        assert_eq!(fuzzy_score("dj", "Jane Doe"), 0);
        assert_eq!(fuzzy_score("zz", "Jane Doe"), 0);
        assert_eq!(fuzzy_score("jane does", "Jane Doe"), 0);
    }

    #[test]
    fn empty_target_never_matches_a_real_query() {
        assert_eq!(fuzzy_score("ab", ""), 0);
    }

    #[test]
    fn tiers_are_strictly_ordered() {
        let exact = fuzzy_score("deal", "Deal");
        let prefix = fuzzy_score("deal", "Deal Room");
        let contains = fuzzy_score("deal", "Open Deal");
        let subsequence = fuzzy_score("deal", "Dental Clinic");
        assert!(exact > prefix && prefix > contains && contains > subsequence);
        assert!(subsequence > 0);
    }
}
