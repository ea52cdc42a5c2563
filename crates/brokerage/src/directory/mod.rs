//! In-memory portal data handed to the matching and search cores, plus the service and
//! HTTP routes that expose them.

pub mod agents;
pub mod import;
mod pages;
mod projection;
pub mod records;
pub mod router;
pub mod service;
pub mod store;

use chrono::NaiveDate;

use crate::matching::{resolve_names, MatchResult};
use crate::search::{
    search, SearchCategory, SearchCollection, SearchOptions, SearchResult, SearchSource,
};

pub use agents::{resolve_transaction_agents, AgentAssignment, AgentResolutionReport};
pub use import::{records_from_reader, DirectoryImportError};
pub use pages::portal_pages;
pub use records::{Contact, Deal, Division, StaticPage, TeamMember, Template, Transaction};
pub use router::directory_router;
pub use service::{AgentMatchView, DirectoryService, DirectoryServiceError};
pub use store::{DirectoryStore, StoreError};

/// Snapshot of every searchable portal collection.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    pub team_members: Vec<TeamMember>,
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,
    pub templates: Vec<Template>,
    pub transactions: Vec<Transaction>,
    pub pages: Vec<StaticPage>,
}

impl Directory {
    /// Empty directory seeded with the built-in portal pages.
    pub fn with_portal_pages() -> Self {
        Self {
            pages: portal_pages(),
            ..Self::default()
        }
    }

    /// Global search across pages, contacts, team members, deals, and templates.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchResult> {
        let pages = SearchCollection::new(
            SearchCategory::Page,
            &self.pages,
            projection::page_fields,
            projection::project_page,
        );
        let contacts = SearchCollection::new(
            SearchCategory::Contact,
            &self.contacts,
            projection::contact_fields,
            projection::project_contact,
        );
        let team_members = SearchCollection::new(
            SearchCategory::TeamMember,
            &self.team_members,
            projection::team_member_fields,
            projection::project_team_member,
        );
        let deals = SearchCollection::new(
            SearchCategory::Deal,
            &self.deals,
            projection::deal_fields,
            projection::project_deal,
        );
        let templates = SearchCollection::new(
            SearchCategory::Template,
            &self.templates,
            projection::template_fields,
            projection::project_template,
        );

        let sources: [&dyn SearchSource; 5] =
            [&pages, &contacts, &team_members, &deals, &templates];
        search(query, &sources, options)
    }

    /// Resolves a comma-separated list of agent names against the team roster.
    pub fn resolve_agents(&self, raw_names: &str) -> Vec<MatchResult<'_, TeamMember>> {
        resolve_names(raw_names, &self.team_members)
    }

    /// Agent resolution for every transaction, optionally limited to closings on or after
    /// `closed_since`. Transactions without a closing date are skipped when filtering.
    pub fn transaction_agents(&self, closed_since: Option<NaiveDate>) -> AgentResolutionReport {
        match closed_since {
            None => resolve_transaction_agents(&self.transactions, &self.team_members),
            Some(since) => {
                let recent: Vec<Transaction> = self
                    .transactions
                    .iter()
                    .filter(|tx| tx.closing_date.is_some_and(|closed| closed >= since))
                    .cloned()
                    .collect();
                resolve_transaction_agents(&recent, &self.team_members)
            }
        }
    }
}
