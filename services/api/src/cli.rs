use crate::commands::{run_agents, run_match, run_search, AgentsArgs, MatchArgs, SearchArgs};
use crate::server;
use brokerage::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Brokerage Portal",
    about = "Serve or query agent name resolution and global search for the brokerage portal",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run a global search across portal exports
    Search(SearchArgs),
    /// Resolve comma-separated agent names against the team roster
    Match(MatchArgs),
    /// Resolve the agent field of every exported transaction
    Agents(AgentsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search(args),
        Command::Match(args) => run_match(args),
        Command::Agents(args) => run_agents(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_rejects_zero_limit() {
        let parsed = Cli::try_parse_from(["brokerage-api", "search", "harbor", "--limit", "0"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["brokerage-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_search_and_agents_arguments() {
        let cli = Cli::try_parse_from(["brokerage-api", "search", "harbor", "--limit", "3"])
            .expect("parses");
        match cli.command {
            Some(Command::Search(args)) => {
                assert_eq!(args.query, "harbor");
                assert_eq!(args.limit, Some(3));
            }
            other => panic!("expected search command, got {other:?}"),
        }

        let cli = Cli::try_parse_from([
            "brokerage-api",
            "agents",
            "--closed-since",
            "2025-01-31",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Agents(args)) => {
                assert_eq!(
                    args.closed_since,
                    chrono::NaiveDate::from_ymd_opt(2025, 1, 31)
                );
            }
            other => panic!("expected agents command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(
            Cli::try_parse_from(["brokerage-api", "agents", "--closed-since", "01/31/2025"])
                .is_err()
        );
    }
}
