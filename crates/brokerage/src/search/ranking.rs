use super::aggregator::SearchResult;

/// Result paired with its ranking key; only the aggregator sees the score.
#[derive(Debug)]
pub struct ScoredResult {
    pub(crate) result: SearchResult,
    pub(crate) score: u32,
}

/// Supertrait of `SearchSource`; unreachable outside this crate.
pub trait Sealed {}
