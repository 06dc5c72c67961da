use crate::commands::{
    run_export, run_rank, run_scenario, run_verdicts, ExportArgs, RankArgs, ScenarioArgs,
    VerdictsArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rto_audit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "RTO Comparison Engine",
    about = "Score, rank and compare registered training providers by state",
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
    /// Rank one state's providers and print the comparison slate
    Rank(RankArgs),
    /// Apply a named scenario (state plus strategy)
    Scenario(ScenarioArgs),
    /// Print sustainability verdicts for one state's providers
    Verdicts(VerdictsArgs),
    /// Write one state's metric table as CSV
    Export(ExportArgs),
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
        Command::Rank(args) => run_rank(args),
        Command::Scenario(args) => run_scenario(args),
        Command::Verdicts(args) => run_verdicts(args),
        Command::Export(args) => run_export(args),
    }
}
