//! Fuzzy ranking of heterogeneous portal records against a free-text query.

pub mod aggregator;
mod ranking;
pub mod scorer;

pub use aggregator::{
    search, Projection, SearchCategory, SearchCollection, SearchOptions, SearchResult,
    SearchSource, DEFAULT_MIN_QUERY_LEN, DEFAULT_SEARCH_LIMIT,
};
pub use scorer::fuzzy_score;
