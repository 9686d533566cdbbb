use crate::prelude::{println, *};
use cfdash_core::contest::{build_contest_detail, ContestDetail};
use cfdash_core::detail::{DetailState, DetailView};
use colored::Colorize;

use super::parse_contest_arg;
use crate::session::Session;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ShowOptions {
    /// Contest ID or URL (e.g., "1900" or "https://codeforces.com/contest/1900")
    #[clap(env = "CFDASH_CONTEST")]
    pub contest: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: ShowOptions, global: crate::Global) -> Result<()> {
    let id = parse_contest_arg(&options.contest)?;
    let mut session = Session::open(&global)?;

    let detail = show_data(&mut session, id).await?;

    if options.json {
        println!("{}", format_detail_json(&detail)?);
    } else {
        print!("{}", format_detail_text(&detail));
    }

    Ok(())
}

/// Resolve a contest through a detail view and describe it
pub async fn show_data(session: &mut Session, id: u64) -> Result<ContestDetail> {
    let mut view = DetailView::new();

    let tag = view.request(id);
    let (tag, outcome) = session.resolver.resolve(tag).await;
    view.complete(tag, outcome);

    match view.state() {
        DetailState::Loaded { contest } => Ok(build_contest_detail(
            contest,
            session.favorites.favorites().contains(contest.id),
        )),
        DetailState::Failed { id, error } => Err(Error::Lookup {
            id: *id,
            source: error.clone(),
        }
        .into()),
        state => Err(eyre!("Contest {id} lookup did not complete: {state:?}")),
    }
}

fn format_detail_json(detail: &ContestDetail) -> Result<String> {
    serde_json::to_string_pretty(detail).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_detail_text(detail: &ContestDetail) -> String {
    let mut result = String::new();

    let phase = if detail.finished {
        detail.phase.green()
    } else {
        detail.phase.yellow()
    };
    let star = if detail.favorite { " *" } else { "" };

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{} [{}]{}\n",
        detail.name.bright_cyan().bold(),
        phase.bold(),
        star.bright_yellow()
    ));
    result.push_str(&format!("{}\n\n", "=".repeat(80).bright_cyan()));

    result.push_str(&format!(
        "  {}: {}\n",
        "Contest ID".green(),
        detail.id.to_string().bright_white()
    ));
    result.push_str(&format!("  {}: {}\n", "Type".green(), detail.contest_type));
    result.push_str(&format!(
        "  {}: {}\n",
        "Start Time".green(),
        detail.start_time.as_deref().unwrap_or("unknown")
    ));
    result.push_str(&format!(
        "  {}: {} hours\n",
        "Duration".green(),
        detail.duration_hours
    ));
    result.push_str(&format!("  {}: {}\n", "Status".green(), detail.status));

    result.push_str(&format!("\n{}:\n", "To toggle favorite".bright_white().bold()));
    result.push_str(&format!(
        "  {}\n",
        format!("cfdash fav toggle {}", detail.id).cyan()
    ));
    result.push_str(&format!("\n{}:\n", "Back to the list".bright_white().bold()));
    result.push_str(&format!("  {}\n", "cfdash list".cyan()));

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::create_test_session;
    use cfdash_core::ContestError;

    #[tokio::test]
    async fn test_show_data() {
        let (mut session, _source, _dir) = create_test_session();
        session.favorites.toggle(2).unwrap();

        let detail = show_data(&mut session, 2).await.unwrap();

        assert_eq!(detail.name, "ICPC Regional Finals");
        assert_eq!(detail.contest_type, "ICPC");
        assert!(detail.favorite);
        assert_eq!(detail.duration_hours, "2.00");
    }

    #[tokio::test]
    async fn test_show_data_not_found() {
        let (mut session, _source, _dir) = create_test_session();

        let err = show_data(&mut session, 999).await.unwrap_err();

        match err.downcast_ref::<Error>() {
            Some(Error::Lookup { id, source }) => {
                assert_eq!(*id, 999);
                assert_eq!(source, &ContestError::NotFound(999));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_show_data_refetches_every_time() {
        let (mut session, source, _dir) = create_test_session();

        session.repository.get_all().await;
        show_data(&mut session, 1).await.unwrap();
        show_data(&mut session, 1).await.unwrap();

        assert_eq!(source.calls(), 3);
    }

    #[test]
    fn test_format_detail_text() {
        let detail = ContestDetail {
            id: 1900,
            name: "Codeforces Round 911 (Div. 2)".to_string(),
            contest_type: "CF".to_string(),
            phase: "FINISHED".to_string(),
            finished: true,
            start_time: Some("2023-11-26 08:05:00 UTC".to_string()),
            duration_hours: "2.00".to_string(),
            frozen: false,
            status: "Not Frozen".to_string(),
            favorite: false,
        };

        let formatted = format_detail_text(&detail);

        assert!(formatted.contains("Codeforces Round 911 (Div. 2)"));
        assert!(formatted.contains("FINISHED"));
        assert!(formatted.contains("1900"));
        assert!(formatted.contains("2023-11-26 08:05:00 UTC"));
        assert!(formatted.contains("2.00"));
        assert!(formatted.contains("Not Frozen"));
        assert!(formatted.contains("cfdash fav toggle 1900"));
    }
}
