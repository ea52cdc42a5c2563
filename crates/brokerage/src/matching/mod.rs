//! Free-text person name resolution against roster-like records.

pub mod matcher;
pub mod normalize;

pub use matcher::{
    find_match, find_match_with_tier, resolve_names, split_names, MatchResult, MatchTier,
    NamedRecord, ResolvedMatch,
};
pub use normalize::normalize_name;
