use crate::infra::load_directory;
use brokerage::config::AppConfig;
use brokerage::directory::{AgentAssignment, AgentResolutionReport, Directory};
use brokerage::error::AppError;
use brokerage::search::SearchResult;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Free-text query (at least two characters)
    pub(crate) query: String,
    /// Maximum number of results (defaults to APP_SEARCH_LIMIT or 10)
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub(crate) limit: Option<usize>,
    /// Directory containing portal CSV exports (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct MatchArgs {
    /// Agent names, comma separated
    pub(crate) names: String,
    /// Directory containing portal CSV exports (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct AgentsArgs {
    /// Directory containing portal CSV exports (defaults to APP_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
    /// Only include transactions closed on or after this date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) closed_since: Option<NaiveDate>,
    /// Only list names that did not resolve or resolved by first name alone
    #[arg(long)]
    pub(crate) needs_review: bool,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs {
        query,
        limit,
        data_dir,
    } = args;

    let config = AppConfig::load()?;
    let directory = directory_for(data_dir, &config)?;
    let options = match limit {
        Some(limit) => config.search.options().with_limit(limit),
        None => config.search.options(),
    };

    let results = directory.search(&query, &options);
    println!("Search results for '{}'", query.trim());
    if results.is_empty() {
        println!("- no matches");
    }
    for result in &results {
        println!("{}", format_search_result(result));
    }
    Ok(())
}

pub(crate) fn run_match(args: MatchArgs) -> Result<(), AppError> {
    let MatchArgs { names, data_dir } = args;

    let config = AppConfig::load()?;
    let directory = directory_for(data_dir, &config)?;

    println!("Agent matches");
    for result in directory.resolve_agents(&names) {
        match (result.record(), result.tier()) {
            (Some(member), Some(tier)) => println!(
                "- {} -> {} ({}) [{}]",
                result.segment,
                member.full_name,
                member.id,
                tier.label()
            ),
            _ => println!("- {} -> no match", result.segment),
        }
    }
    Ok(())
}

pub(crate) fn run_agents(args: AgentsArgs) -> Result<(), AppError> {
    let AgentsArgs {
        data_dir,
        closed_since,
        needs_review,
    } = args;

    let config = AppConfig::load()?;
    let directory = directory_for(data_dir, &config)?;
    let report = directory.transaction_agents(closed_since);

    render_agent_report(&report, needs_review);
    Ok(())
}

fn directory_for(data_dir: Option<PathBuf>, config: &AppConfig) -> Result<Directory, AppError> {
    let data_dir = data_dir.or_else(|| config.data_dir.clone());
    load_directory(data_dir.as_deref())
}

fn format_search_result(result: &SearchResult) -> String {
    match &result.subtitle {
        Some(subtitle) => format!(
            "- [{}] {} ({}) -> {}",
            result.category.label(),
            result.title,
            subtitle,
            result.target
        ),
        None => format!(
            "- [{}] {} -> {}",
            result.category.label(),
            result.title,
            result.target
        ),
    }
}

fn render_agent_report(report: &AgentResolutionReport, needs_review: bool) {
    println!("Transaction agent resolution");
    println!(
        "- {} resolved | {} unmatched | {} first-name only",
        report.resolved, report.unmatched, report.loose_matches
    );

    let assignments: Box<dyn Iterator<Item = &AgentAssignment>> = if needs_review {
        Box::new(report.needs_review())
    } else {
        Box::new(report.assignments.iter())
    };

    for assignment in assignments {
        match (&assignment.member_name, assignment.tier) {
            (Some(member), Some(tier)) => println!(
                "  - {}: {} -> {} [{}]",
                assignment.transaction_id,
                assignment.agent_name,
                member,
                tier.label()
            ),
            _ => println!(
                "  - {}: {} -> unmatched",
                assignment.transaction_id, assignment.agent_name
            ),
        }
    }
}
