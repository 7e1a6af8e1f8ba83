use crate::demo::{run_demo, run_search_command, DemoArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use property_discovery::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Property Discovery",
    about = "Serve and explore filtered property listings from the command line",
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
    /// Filter the catalog for one route and print the map and list views
    Search(SearchArgs),
    /// Walk through a scripted browsing session
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
        Command::Search(args) => run_search_command(args),
        Command::Demo(args) => run_demo(args),
    }
}
