use serde::Serialize;

use super::normalize::{name_tokens, normalize_name};

/// Records that can be resolved from a free-text person name.
pub trait NamedRecord {
    /// Name used for matching; `None` is compared as an empty name.
    fn match_name(&self) -> Option<&str>;
}

/// Strategy that produced a match, tried in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// Normalized names are identical.
    Exact,
    /// First and last tokens agree; middle names and initials are ignored.
    FirstLast,
    /// Only the first token agrees. Loose by construction: two people sharing a
    /// first name resolve to whichever comes first.
    FirstName,
}

impl MatchTier {
    pub const fn label(self) -> &'static str {
        match self {
            MatchTier::Exact => "exact",
            MatchTier::FirstLast => "first_last",
            MatchTier::FirstName => "first_name",
        }
    }

    pub const fn is_loose(self) -> bool {
        matches!(self, MatchTier::FirstName)
    }
}

/// Record chosen for a query segment together with the tier that chose it.
#[derive(Debug, PartialEq)]
pub struct ResolvedMatch<'a, C> {
    pub record: &'a C,
    pub tier: MatchTier,
}

impl<C> Clone for ResolvedMatch<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ResolvedMatch<'_, C> {}

/// Outcome for one comma-separated segment of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a, C> {
    pub segment: String,
    pub matched: Option<ResolvedMatch<'a, C>>,
}

impl<'a, C> MatchResult<'a, C> {
    pub fn record(&self) -> Option<&'a C> {
        self.matched.map(|found| found.record)
    }

    pub fn tier(&self) -> Option<MatchTier> {
        self.matched.map(|found| found.tier)
    }
}

/// Returns the first candidate matching `query`, or `None`.
pub fn find_match<'a, C: NamedRecord>(query: &str, candidates: &'a [C]) -> Option<&'a C> {
    find_match_with_tier(query, candidates).map(|(_, record)| record)
}

/// Same as [`find_match`], also reporting which tier produced the hit.
///
/// Candidates are scanned in the order given and the first hit of the earliest tier wins,
/// so reordering `candidates` can change the result when several records qualify.
pub fn find_match_with_tier<'a, C: NamedRecord>(
    query: &str,
    candidates: &'a [C],
) -> Option<(MatchTier, &'a C)> {
    let query = normalize_name(query);
    let query_tokens = name_tokens(&query);
    let (&query_first, &query_last) = (query_tokens.first()?, query_tokens.last()?);

    let normalized: Vec<String> = candidates
        .iter()
        .map(|candidate| normalize_name(candidate.match_name().unwrap_or_default()))
        .collect();

    if let Some(index) = normalized.iter().position(|name| *name == query) {
        return Some((MatchTier::Exact, &candidates[index]));
    }

    if query_tokens.len() >= 2 {
        let hit = normalized.iter().position(|name| {
            let tokens = name_tokens(name);
            tokens.len() >= 2
                && tokens.first() == Some(&query_first)
                && tokens.last() == Some(&query_last)
        });
        if let Some(index) = hit {
            return Some((MatchTier::FirstLast, &candidates[index]));
        }
    }

    normalized
        .iter()
        .position(|name| name_tokens(name).first() == Some(&query_first))
        .map(|index| (MatchTier::FirstName, &candidates[index]))
}

/// Splits a free-text agent field on commas, trimming parts and dropping empty ones.
pub fn split_names(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Resolves every comma-separated name in `raw` independently, in input order.
pub fn resolve_names<'a, C: NamedRecord>(
    raw: &str,
    candidates: &'a [C],
) -> Vec<MatchResult<'a, C>> {
    split_names(raw)
        .into_iter()
        .map(|segment| MatchResult {
            segment: segment.to_string(),
            matched: find_match_with_tier(segment, candidates)
                .map(|(tier, record)| ResolvedMatch { record, tier }),
        })
        .collect()
}
