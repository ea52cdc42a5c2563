use serde::Serialize;

use super::records::{TeamMember, Transaction};
use crate::matching::{resolve_names, MatchTier};

/// One agent name from a transaction and the team member it resolved to, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentAssignment {
    pub transaction_id: String,
    pub agent_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<MatchTier>,
}

/// Roll-up of agent resolution across a batch of transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgentResolutionReport {
    pub assignments: Vec<AgentAssignment>,
    pub resolved: usize,
    pub unmatched: usize,
    /// Resolved through the first-name fallback; worth a human glance.
    pub loose_matches: usize,
}

impl AgentResolutionReport {
    pub fn unmatched_assignments(&self) -> impl Iterator<Item = &AgentAssignment> {
        self.assignments
            .iter()
            .filter(|assignment| assignment.member_id.is_none())
    }

    pub fn loose_assignments(&self) -> impl Iterator<Item = &AgentAssignment> {
        self.assignments
            .iter()
            .filter(|assignment| assignment.tier.is_some_and(MatchTier::is_loose))
    }

    /// Names a person should confirm: unmatched or resolved by first name alone.
    pub fn needs_review(&self) -> impl Iterator<Item = &AgentAssignment> {
        self.assignments.iter().filter(|assignment| {
            assignment.member_id.is_none() || assignment.tier.is_some_and(MatchTier::is_loose)
        })
    }
}

/// Resolves the free-text agent field of every transaction against the roster.
pub fn resolve_transaction_agents(
    transactions: &[Transaction],
    roster: &[TeamMember],
) -> AgentResolutionReport {
    let mut report = AgentResolutionReport::default();

    for transaction in transactions {
        for result in resolve_names(&transaction.agent_names, roster) {
            let tier = result.tier();
            let member = result.record();

            match tier {
                Some(tier) if tier.is_loose() => {
                    report.resolved += 1;
                    report.loose_matches += 1;
                }
                Some(_) => report.resolved += 1,
                None => report.unmatched += 1,
            }

            report.assignments.push(AgentAssignment {
                transaction_id: transaction.id.clone(),
                agent_name: result.segment,
                member_id: member.map(|m| m.id.clone()),
                member_name: member.map(|m| m.full_name.clone()),
                tier,
            });
        }
    }

    report
}
