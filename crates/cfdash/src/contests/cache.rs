use crate::prelude::{println, *};
use colored::Colorize;

use crate::session::Session;

#[derive(Debug, clap::Parser)]
#[command(name = "cache")]
#[command(about = "Manage the local contest cache")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Delete the cached contest collection; favorites are kept
    #[clap(name = "clear")]
    Clear,

    /// Fetch the contest collection again and cache it
    #[clap(name = "refresh")]
    Refresh,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let mut session = Session::open(&global)?;

    match app.command {
        Commands::Clear => {
            session.repository.invalidate()?;
            println!("{}", "Contest cache cleared".green());
        }
        Commands::Refresh => {
            let count = refresh_data(&mut session).await?;
            println!(
                "{} {} contests",
                "Cached".green().bold(),
                count.to_string().bright_white()
            );
        }
    }

    Ok(())
}

/// Invalidate and re-fetch the collection, returning its size
///
/// The repository swallows fetch failures, so an empty result after a
/// refresh is reported as an error here.
pub async fn refresh_data(session: &mut Session) -> Result<usize> {
    session.repository.invalidate()?;
    let count = session.repository.get_all().await.len();

    if count == 0 {
        return Err(eyre!(
            "No contests fetched, the API may be unreachable. Run with RUST_LOG=error for details"
        ));
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::source::testing::{create_test_collection, ScriptedSource};
    use cfdash_core::ContestError;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_refresh_data_refetches() {
        let temp_dir = TempDir::new().unwrap();
        let source = Arc::new(ScriptedSource::ok(create_test_collection()));
        let mut session = Session::new(source.clone(), temp_dir.path());

        session.repository.get_all().await;
        let count = refresh_data(&mut session).await.unwrap();

        assert_eq!(count, 3);
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_refresh_data_reports_failure() {
        let temp_dir = TempDir::new().unwrap();
        let source = Arc::new(ScriptedSource::new(vec![Err(ContestError::Network(
            "offline".to_string(),
        ))]));
        let mut session = Session::new(source, temp_dir.path());

        assert!(refresh_data(&mut session).await.is_err());
    }
}
