use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use super::agents::AgentResolutionReport;
use super::records::TeamMember;
use super::store::{DirectoryStore, StoreError};
use crate::matching::MatchTier;
use crate::search::{SearchOptions, SearchResult};

/// Owned form of a single agent-name resolution, suitable for responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentMatchView {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<TeamMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<MatchTier>,
}

/// Fetches a directory snapshot from the store and runs the matching and search cores on it.
pub struct DirectoryService<S> {
    store: Arc<S>,
    options: SearchOptions,
}

impl<S> DirectoryService<S>
where
    S: DirectoryStore + 'static,
{
    pub fn new(store: Arc<S>, options: SearchOptions) -> Self {
        Self { store, options }
    }

    /// Global search; `limit` overrides the configured result budget for this call.
    pub fn search(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SearchResult>, DirectoryServiceError> {
        let directory = self.store.snapshot()?;
        let options = match limit {
            Some(limit) => self.options.with_limit(limit),
            None => self.options,
        };

        let results = directory.search(query, &options);
        debug!(query, limit = options.limit, hits = results.len(), "search served");
        Ok(results)
    }

    pub fn resolve_agents(
        &self,
        raw_names: &str,
    ) -> Result<Vec<AgentMatchView>, DirectoryServiceError> {
        let directory = self.store.snapshot()?;
        let views: Vec<AgentMatchView> = directory
            .resolve_agents(raw_names)
            .into_iter()
            .map(|result| AgentMatchView {
                member: result.record().cloned(),
                tier: result.tier(),
                name: result.segment,
            })
            .collect();

        debug!(
            names = views.len(),
            unmatched = views.iter().filter(|view| view.member.is_none()).count(),
            "agent names resolved"
        );
        Ok(views)
    }

    pub fn transaction_agents(
        &self,
        closed_since: Option<NaiveDate>,
    ) -> Result<AgentResolutionReport, DirectoryServiceError> {
        let directory = self.store.snapshot()?;
        let report = directory.transaction_agents(closed_since);
        debug!(
            resolved = report.resolved,
            unmatched = report.unmatched,
            loose = report.loose_matches,
            "transaction agents resolved"
        );
        Ok(report)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
}
