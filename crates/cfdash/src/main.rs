use std::path::PathBuf;

use crate::prelude::*;
use clap::Parser;

mod cache;
mod contests;
mod detail;
mod error;
mod favorites;
mod mcp;
mod prelude;
mod repository;
mod session;
mod source;
mod store;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Browse, search and bookmark Codeforces contests"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Codeforces API base URL
    #[clap(
        long,
        env = "CFDASH_API_BASE",
        global = true,
        default_value = source::DEFAULT_API_BASE
    )]
    api_base: String,

    /// Directory holding the contest cache and favorites (defaults to the user cache dir)
    #[clap(long, env = "CFDASH_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[clap(long, env = "CFDASH_TIMEOUT", global = true, default_value = "30")]
    timeout: u64,

    /// Whether to display additional information.
    #[clap(long, env = "CFDASH_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs_next::cache_dir()
                .ok_or(Error::NoDataDir)?
                .join("cfdash")),
        }
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List contests with filtering, search and pagination
    List(crate::contests::list::ListOptions),

    /// Show the details of a single contest
    Show(crate::contests::show::ShowOptions),

    /// Manage favorite contests
    Fav(crate::contests::fav::App),

    /// Manage the local contest cache
    Cache(crate::contests::cache::App),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => crate::contests::list::run(options, app.global).await,
        SubCommands::Show(options) => crate::contests::show::run(options, app.global).await,
        SubCommands::Fav(sub_app) => crate::contests::fav::run(sub_app, app.global).await,
        SubCommands::Cache(sub_app) => crate::contests::cache::run(sub_app, app.global).await,
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
