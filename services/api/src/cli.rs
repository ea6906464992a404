use crate::demo::{run_confirm, run_demo, run_export, ConfirmArgs, DemoArgs, ExportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use permit_wizard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Permit Wizard",
    about = "Serve and exercise the secondhand-dealer permit questionnaire from the command line",
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
    /// Print the confirmation summary for a saved record
    Confirm(ConfirmArgs),
    /// Send a saved record to the document generator and write the result
    Export(ExportArgs),
    /// Walk a scripted session through every step
    Demo(DemoArgs),
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
        Command::Confirm(args) => run_confirm(args).await,
        Command::Export(args) => run_export(args).await,
        Command::Demo(args) => run_demo(args).await,
    }
}
