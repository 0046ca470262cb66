use crate::prelude::*;
use clap::Parser;

mod dialects;
mod error;
mod export;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Convert blog articles into forum markup for cross-posting"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "CROSSPOST_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Export an article to a forum dialect
    Export(crate::export::ExportOptions),

    /// List the available dialects
    Dialects(crate::dialects::DialectsOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Export(options) => crate::export::run(options, app.global).await,
        SubCommands::Dialects(options) => crate::dialects::run(options, app.global),
    }
}
