use crate::prelude::{eprintln, println, *};
use cfdash_core::contest::ContestType;
use cfdash_core::listing::{build_list_output, list_command, ListOutput};
use cfdash_core::query::{self, QuerySpec};
use cfdash_core::{pagination, ContestError};
use colored::Colorize;
use prettytable::row;

use super::truncate_text;
use crate::session::Session;

const NAME_WIDTH: usize = 60;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListOptions {
    /// Contest type: cf, ioi, icpc
    #[arg(short = 't', long = "type", value_name = "TYPE", conflicts_with = "favorites")]
    pub contest_type: Option<String>,

    /// Only show favorite contests
    #[arg(short, long)]
    pub favorites: bool,

    /// Case-insensitive substring to look for in contest names
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Number of contests per page
    #[arg(short, long, env = "CFDASH_LIMIT", default_value = "10")]
    pub limit: usize,

    /// Page number (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Discard the cached collection and fetch it again
    #[arg(long)]
    pub refresh: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListOptions {
    pub fn query(&self) -> Result<QuerySpec, ContestError> {
        let mut spec = QuerySpec::new().with_search(self.search.clone());

        if self.favorites {
            spec = spec.favorites_only();
        } else if let Some(contest_type) = &self.contest_type {
            spec = spec.with_type(ContestType::parse_filter(contest_type)?);
        }

        Ok(spec)
    }
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let mut session = Session::open(&global)?;

    if options.refresh {
        if global.verbose {
            eprintln!("Refreshing contest cache...");
        }
        session.repository.invalidate()?;
    }

    let query = options.query()?;
    let list_output = list_data(&mut session, query, options.limit, options.page).await?;

    if options.json {
        output_json(&list_output)?;
    } else {
        output_formatted(&list_output);
    }

    Ok(())
}

/// Query the contest collection and return one page of it
pub async fn list_data(
    session: &mut Session,
    query: QuerySpec,
    limit: usize,
    page: usize,
) -> Result<ListOutput, ContestError> {
    let contests = session.repository.get_all().await;
    let favorites = session.favorites.favorites();

    let filtered = query::apply(contests, favorites, &query);
    let page = pagination::page(&filtered, limit, page)?;

    Ok(build_list_output(page, favorites, query))
}

fn format_list_json(output: &ListOutput) -> Result<String> {
    serde_json::to_string_pretty(output).map_err(|e| eyre!("JSON serialization failed: {}", e))
}

fn format_list_text(output: &ListOutput) -> String {
    let mut result = String::new();
    let pagination = &output.pagination;

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!(
            "CODEFORCES CONTESTS (Page {} of {})",
            pagination.current_page, pagination.total_pages
        )
        .bright_cyan()
        .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if output.items.is_empty() {
        result.push_str(&format!("\n{}\n", "No contests on this page.".yellow()));
    } else {
        let mut table = new_table();
        table.set_titles(row!["#", "ID", "Name", "Type", "Phase", "Start", "Fav"]);

        for (idx, item) in output.items.iter().enumerate() {
            let number = (pagination.current_page - 1) * pagination.limit + idx + 1;
            let favorite = if item.favorite { "*" } else { "" };
            table.add_row(row![
                number,
                item.id,
                truncate_text(&item.name, NAME_WIDTH),
                item.contest_type,
                item.phase,
                item.start_time.as_deref().unwrap_or("-"),
                favorite
            ]);
        }

        result.push('\n');
        result.push_str(&table.to_string());
    }

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!("{}\n", "NAVIGATION".bright_yellow().bold()));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    result.push_str(&format!(
        "\n{} {} {} {} ({} {})\n",
        "Showing page".bright_white(),
        pagination.current_page.to_string().bright_cyan().bold(),
        "of".bright_white(),
        pagination.total_pages.to_string().bright_cyan().bold(),
        pagination.total_items.to_string().bright_cyan().bold(),
        "matching contests".bright_white(),
    ));

    result.push_str(&format!("\n{}:\n", "To navigate".bright_white().bold()));
    if let Some(command) = &pagination.next_page_command {
        result.push_str(&format!("  {}: {}\n", "Next page".green(), command.cyan()));
    }
    if let Some(command) = &pagination.prev_page_command {
        result.push_str(&format!("  {}: {}\n", "Previous page".green(), command.cyan()));
    }

    result.push_str(&format!(
        "\n{}:\n",
        "To change page size".bright_white().bold()
    ));
    // A new size invalidates the current page number, so start over at 1
    result.push_str(&format!(
        "  {}\n",
        list_command(&output.query, pagination.limit, 1)
            .replace(&format!("--limit {}", pagination.limit), "--limit <number>")
            .cyan()
    ));

    result.push_str(&format!("\n{}:\n", "To view a contest".bright_white().bold()));
    result.push_str(&format!("  {}\n", "cfdash show <id>".cyan()));
    if let Some(first) = output.items.first() {
        result.push_str(&format!(
            "  {}: {}\n",
            "Example".green(),
            format!("cfdash show {}", first.id).cyan()
        ));
    }

    result.push_str(&format!("\n{}:\n", "To mark a favorite".bright_white().bold()));
    result.push_str(&format!("  {}\n", "cfdash fav toggle <id>".cyan()));

    result.push('\n');
    result
}

fn output_json(output: &ListOutput) -> Result<()> {
    let json = format_list_json(output)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(output: &ListOutput) {
    print!("{}", format_list_text(output));
}
