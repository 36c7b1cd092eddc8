use crate::report::{run_list, run_stats, ListArgs, StatsArgs};
use crate::server;
use alumni_directory::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Alumni Directory",
    about = "Serve and inspect the alumni directory from the command line",
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
    /// Query the eligible alumni in a roster export
    Alumni {
        #[command(subcommand)]
        command: AlumniCommand,
    },
}

#[derive(Subcommand, Debug)]
enum AlumniCommand {
    /// Print alumni cards matching the given filters
    List(ListArgs),
    /// Print the directory statistics block
    Stats(StatsArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured roster export (CSV or JSON)
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Alumni {
            command: AlumniCommand::List(args),
        } => run_list(args),
        Command::Alumni {
            command: AlumniCommand::Stats(args),
        } => run_stats(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["alumni-directory-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn list_accepts_filter_flags() {
        let cli = Cli::try_parse_from([
            "alumni-directory-api",
            "alumni",
            "list",
            "--roster",
            "alumni.json",
            "--company",
            "Google",
            "--further-studies",
            "no",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Alumni {
                command: AlumniCommand::List(args),
            }) => {
                assert_eq!(args.roster, Some(PathBuf::from("alumni.json")));
                let criteria = args.filters.criteria();
                assert_eq!(criteria.company.as_deref(), Some("Google"));
                assert_eq!(criteria.further_studies, Some(false));
            }
            other => panic!("expected alumni list command, got {other:?}"),
        }
    }
}
