use crate::demo::{run_demo, run_evaluate, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use scheme_saathi::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Scheme Saathi",
    about = "Match citizen profiles to welfare schemes over HTTP or from the command line",
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
    /// Evaluate a profile file against a scheme file and print the batch result
    Evaluate(EvaluateArgs),
    /// Run the built-in sample citizen against the built-in sample schemes
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Scheme catalog JSON file (overrides SCHEME_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Demo => run_demo(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_falls_back_to_serve() {
        let cli = Cli::try_parse_from(["scheme-saathi"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn evaluate_requires_both_inputs() {
        let missing = Cli::try_parse_from(["scheme-saathi", "evaluate", "--profile", "p.json"]);
        assert!(missing.is_err());

        let cli = Cli::try_parse_from([
            "scheme-saathi",
            "evaluate",
            "--profile",
            "p.json",
            "--schemes",
            "s.json",
            "--pretty",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Evaluate(args)) => {
                assert_eq!(args.profile, PathBuf::from("p.json"));
                assert!(args.pretty);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_accepts_catalog_override() {
        let cli = Cli::try_parse_from([
            "scheme-saathi",
            "serve",
            "--port",
            "8080",
            "--catalog",
            "schemes.json",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.catalog, Some(PathBuf::from("schemes.json")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
