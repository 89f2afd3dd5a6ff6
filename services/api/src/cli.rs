use crate::demo::{run_demo, run_solicitudes_list, DemoArgs, SolicitudesListArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use podenza::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Podenza Solicitudes",
    about = "Demonstrate and run the Podenza solicitudes dashboard from the command line",
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
    /// Inspect the solicitudes board from the command line
    Solicitudes {
        #[command(subcommand)]
        command: SolicitudesCommand,
    },
    /// Run an end-to-end CLI demo covering the dashboard and the workbench
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum SolicitudesCommand {
    /// List solicitudes with the dashboard filters applied
    List(SolicitudesListArgs),
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
        Command::Solicitudes {
            command: SolicitudesCommand::List(args),
        } => run_solicitudes_list(args),
        Command::Demo(args) => run_demo(args),
    }
}
