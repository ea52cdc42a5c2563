use serde::{Deserialize, Serialize};

use super::ranking::{Sealed, ScoredResult};
use super::scorer::fuzzy_score;

pub const DEFAULT_SEARCH_LIMIT: usize = 10;
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Collection a search result originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchCategory {
    Page,
    Contact,
    TeamMember,
    Deal,
    Template,
}

impl SearchCategory {
    pub const fn label(self) -> &'static str {
        match self {
            SearchCategory::Page => "page",
            SearchCategory::Contact => "contact",
            SearchCategory::TeamMember => "team_member",
            SearchCategory::Deal => "deal",
            SearchCategory::Template => "template",
        }
    }
}

/// Caller-facing search hit. Carries no score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub category: SearchCategory,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub target: String,
}

/// Display fields a collection derives from one of its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub target: String,
}

impl SearchResult {
    fn from_projection(category: SearchCategory, projection: Projection) -> Self {
        let Projection {
            id,
            title,
            subtitle,
            target,
        } = projection;
        Self {
            id,
            category,
            title,
            subtitle,
            target,
        }
    }
}

/// Tunables for [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results returned.
    pub limit: usize,
    /// Trimmed queries with fewer characters than this return nothing.
    pub min_query_len: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

impl SearchOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// A borrowed collection of records plus the rules for searching and displaying them.
pub struct SearchCollection<'a, T> {
    category: SearchCategory,
    records: &'a [T],
    fields: fn(&T) -> Vec<Option<&str>>,
    project: fn(&T) -> Projection,
}

impl<'a, T> SearchCollection<'a, T> {
    pub fn new(
        category: SearchCategory,
        records: &'a [T],
        fields: fn(&T) -> Vec<Option<&str>>,
        project: fn(&T) -> Projection,
    ) -> Self {
        Self {
            category,
            records,
            fields,
            project,
        }
    }

    fn best_score(&self, query: &str, record: &T) -> u32 {
        (self.fields)(record)
            .into_iter()
            .map(|field| fuzzy_score(query, field.unwrap_or_default()))
            .max()
            .unwrap_or(0)
    }
}

/// Type-erased view of a [`SearchCollection`] so collections of different record types
/// can be searched together.
///
/// Sealed: [`SearchCollection`] is the only implementor.
pub trait SearchSource: Sealed {
    fn category(&self) -> SearchCategory;

    #[doc(hidden)]
    fn score_into(&self, query: &str, ranked: &mut Vec<ScoredResult>);
}

impl<T> Sealed for SearchCollection<'_, T> {}

impl<T> SearchSource for SearchCollection<'_, T> {
    fn category(&self) -> SearchCategory {
        self.category
    }

    fn score_into(&self, query: &str, ranked: &mut Vec<ScoredResult>) {
        for record in self.records {
            let score = self.best_score(query, record);
            if score == 0 {
                continue;
            }
            ranked.push(ScoredResult {
                result: SearchResult::from_projection(self.category, (self.project)(record)),
                score,
            });
        }
    }
}

/// Scores every record of every source against `query`, best first.
///
/// Each record keeps the highest score across its fields; zero-score records are dropped.
/// Equal scores keep source order, then record order.
pub fn search(
    query: &str,
    sources: &[&dyn SearchSource],
    options: &SearchOptions,
) -> Vec<SearchResult> {
    let query = query.trim();
    if query.chars().count() < options.min_query_len {
        return Vec::new();
    }

    let mut ranked = Vec::new();
    for source in sources {
        source.score_into(query, &mut ranked);
    }

    ranked.sort_by(|left, right| right.score.cmp(&left.score));
    ranked.truncate(options.limit);
    ranked.into_iter().map(|entry| entry.result).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Listing {
        id: &'static str,
        name: &'static str,
        agent: Option<&'static str>,
    }

    fn listing(id: &'static str, name: &'static str) -> Listing {
        Listing {
            id,
            name,
            agent: None,
        }
    }

    fn listing_fields(listing: &Listing) -> Vec<Option<&str>> {
        vec![Some(listing.name), listing.agent]
    }

    fn project_listing(listing: &Listing) -> Projection {
        Projection {
            id: listing.id.to_string(),
            title: listing.name.to_string(),
            subtitle: listing.agent.map(str::to_string),
            target: format!("/deals/{}", listing.id),
        }
    }

    fn roster_fields<'a>(name: &'a &str) -> Vec<Option<&'a str>> {
        vec![Some(*name)]
    }

    fn project_roster(name: &&str) -> Projection {
        Projection {
            id: name.to_string(),
            title: name.to_string(),
            subtitle: None,
            target: "/team".to_string(),
        }
    }

    fn ids(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|result| result.id.as_str()).collect()
    }

    #[test]
    fn short_queries_return_nothing() {
        let records = vec![listing("1", "a"), listing("2", "Alpha")];
        let deals = SearchCollection::new(
            SearchCategory::Deal,
            &records,
            listing_fields,
            project_listing,
        );
        let options = SearchOptions::default();
        assert!(search("a", &[&deals], &options).is_empty());
        assert!(search("  a  ", &[&deals], &options).is_empty());
        assert_eq!(ids(&search(" al ", &[&deals], &options)), vec!["2"]);
    }

    #[test]
    fn results_sorted_by_score_and_capped() {
        // "doe" scores 60, 100, 0 and 80 respectively.
        let records = vec![
            listing("contains", "Jane Doe"),
            listing("exact", "Doe"),
            listing("miss", "Smith"),
            listing("prefix", "Doehler Plaza"),
        ];
        let deals = SearchCollection::new(
            SearchCategory::Deal,
            &records,
            listing_fields,
            project_listing,
        );

        let capped = search("doe", &[&deals], &SearchOptions::default().with_limit(2));
        assert_eq!(ids(&capped), vec!["exact", "prefix"]);

        let all = search("doe", &[&deals], &SearchOptions::default());
        assert_eq!(ids(&all), vec!["exact", "prefix", "contains"]);
    }

    #[test]
    fn record_keeps_best_field_score() {
        let records = vec![Listing {
            id: "1",
            name: "Riverside Lofts",
            agent: Some("Dana Reyes"),
        }];
        let deals = SearchCollection::new(
            SearchCategory::Deal,
            &records,
            listing_fields,
            project_listing,
        );

        let results = search("dana", &[&deals], &SearchOptions::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].subtitle.as_deref(), Some("Dana Reyes"));
        assert_eq!(results[0].category, SearchCategory::Deal);
        assert_eq!(results[0].target, "/deals/1");
    }

    #[test]
    fn ties_keep_source_then_record_order() {
        let pages = vec![listing("page-a", "Marketing Hub")];
        let deals = vec![listing("deal-a", "Marketing Plan"), listing("deal-b", "Marketing Kit")];
        let pages = SearchCollection::new(
            SearchCategory::Page,
            &pages,
            listing_fields,
            project_listing,
        );
        let deals = SearchCollection::new(
            SearchCategory::Deal,
            &deals,
            listing_fields,
            project_listing,
        );

        let results = search("market", &[&pages, &deals], &SearchOptions::default());
        assert_eq!(ids(&results), vec!["page-a", "deal-a", "deal-b"]);
        assert_eq!(results[0].category, SearchCategory::Page);
    }

    #[test]
    fn empty_sources_contribute_nothing() {
        let none: Vec<Listing> = Vec::new();
        let empty = SearchCollection::new(
            SearchCategory::Template,
            &none,
            listing_fields,
            project_listing,
        );
        assert_eq!(empty.category(), SearchCategory::Template);
        assert!(search("lease", &[&empty], &SearchOptions::default()).is_empty());
        assert!(search("lease", &[], &SearchOptions::default()).is_empty());
    }

    #[test]
    fn collections_of_different_record_types_share_one_search() {
        let listings = vec![listing("deal-1", "Cedar Court")];
        let names = vec!["Cedar Team Roster"];
        let deals = SearchCollection::new(
            SearchCategory::Deal,
            &listings,
            listing_fields,
            project_listing,
        );
        let members = SearchCollection::new(
            SearchCategory::TeamMember,
            &names,
            roster_fields,
            project_roster,
        );
        let sources: [&dyn SearchSource; 2] = [&members, &deals];

        let results = search("cedar", &sources, &SearchOptions::default());
        assert_eq!(ids(&results), vec!["Cedar Team Roster", "deal-1"]);
        assert_eq!(sources[0].category(), SearchCategory::TeamMember);
    }

    #[test]
    fn serialized_result_has_no_score() {
        let records = vec![listing("7", "Harbor Point")];
        let deals = SearchCollection::new(
            SearchCategory::Deal,
            &records,
            listing_fields,
            project_listing,
        );
        let results = search("harbor", &[&deals], &SearchOptions::default());
        let payload = serde_json::to_value(&results[0]).expect("serializes");
        assert_eq!(payload["category"], "deal");
        assert!(payload.get("score").is_none());
        assert!(payload.get("subtitle").is_none());
    }
}
