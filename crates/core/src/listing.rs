use serde::Serialize;

use crate::contest::{duration_hours, format_start_time, Contest};
use crate::favorites::FavoriteSet;
use crate::pagination::Page;
use crate::query::QuerySpec;

/// Individual list row
#[derive(Debug, Serialize, Clone)]
pub struct ListItem {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub contest_type: String,
    pub phase: String,
    pub start_time: Option<String>,
    pub duration_hours: f64,
    pub favorite: bool,
}

/// Pagination metadata for list output
#[derive(Debug, Serialize, Clone)]
pub struct ListPaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub limit: usize,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Complete list output with items and pagination
#[derive(Debug, Serialize, Clone)]
pub struct ListOutput {
    pub query: QuerySpec,
    pub items: Vec<ListItem>,
    pub pagination: ListPaginationInfo,
}

/// Quote `value` so a POSIX shell passes it through as a single argument
fn shell_quote(value: &str) -> String {
    // NUL cannot appear in an argument
    let value = value.replace('\0', "");
    shlex::try_quote(&value)
        .map(|quoted| quoted.into_owned())
        .unwrap_or_default()
}

/// Build the `cfdash list` invocation that reproduces `query` at `page`
pub fn list_command(query: &QuerySpec, limit: usize, page: usize) -> String {
    let mut command = String::from("cfdash list");

    if query.favorites_only {
        command.push_str(" --favorites");
    } else if let Some(contest_type) = &query.type_filter {
        command.push_str(&format!(" --type {}", contest_type.as_str().to_lowercase()));
    }
    if !query.search_term.is_empty() {
        command.push_str(&format!(" --search {}", shell_quote(&query.search_term)));
    }

    command.push_str(&format!(" --limit {limit} --page {page}"));
    command
}

/// Transform a page of contests into list output
///
/// Marks favorites and attaches navigation commands for the neighbouring
/// pages of the same query.
pub fn build_list_output(page: Page<Contest>, favorites: &FavoriteSet, query: QuerySpec) -> ListOutput {
    let next_page_command = page
        .has_next()
        .then(|| list_command(&query, page.page_size, page.page_number + 1));
    let prev_page_command = page
        .has_previous()
        .then(|| list_command(&query, page.page_size, page.page_number - 1));

    let items = page
        .items
        .iter()
        .map(|contest| ListItem {
            id: contest.id,
            name: contest.name.clone(),
            contest_type: contest.contest_type.to_string(),
            phase: contest.phase.to_string(),
            start_time: format_start_time(contest.start_time_seconds),
            duration_hours: duration_hours(contest.duration_seconds),
            favorite: favorites.contains(contest.id),
        })
        .collect();

    ListOutput {
        query,
        items,
        pagination: ListPaginationInfo {
            current_page: page.page_number,
            total_pages: page.total_pages,
            total_items: page.total_items,
            limit: page.page_size,
            next_page_command,
            prev_page_command,
        },
    }
}
