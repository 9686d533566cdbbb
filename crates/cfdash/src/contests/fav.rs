use crate::prelude::{println, *};
use colored::Colorize;
use prettytable::row;
use serde::Serialize;

use super::{parse_contest_arg, truncate_text};
use crate::session::Session;

#[derive(Debug, clap::Parser)]
#[command(name = "fav")]
#[command(about = "Manage favorite contests")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Mark a contest as favorite, or unmark it if it already is
    #[clap(name = "toggle")]
    Toggle(ToggleOptions),

    /// List favorite contest ids with their names
    #[clap(name = "list")]
    List(FavListOptions),
}

#[derive(Debug, clap::Args, Clone)]
pub struct ToggleOptions {
    /// Contest ID or URL
    pub contest: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, Clone)]
pub struct FavListOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct ToggleOutput {
    pub id: u64,
    pub favorite: bool,
    pub total_favorites: usize,
}

/// A favorite id and, when the contest is still listed, its name
#[derive(Debug, Serialize, Clone)]
pub struct FavoriteEntry {
    pub id: u64,
    pub name: Option<String>,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let mut session = Session::open(&global)?;

    match app.command {
        Commands::Toggle(options) => {
            let id = parse_contest_arg(&options.contest)?;
            let output = toggle_data(&mut session, id)?;

            if options.json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                let verb = if output.favorite { "Added" } else { "Removed" };
                println!(
                    "{} contest {} {} favorites ({} total)",
                    verb.green().bold(),
                    id.to_string().bright_white(),
                    if output.favorite { "to" } else { "from" },
                    output.total_favorites
                );
            }
        }
        Commands::List(options) => {
            let entries = favorites_data(&mut session).await;

            if options.json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print!("{}", format_favorites_text(&entries));
            }
        }
    }

    Ok(())
}

pub fn toggle_data(session: &mut Session, id: u64) -> Result<ToggleOutput> {
    let favorite = session.favorites.toggle(id)?;

    Ok(ToggleOutput {
        id,
        favorite,
        total_favorites: session.favorites.favorites().len(),
    })
}

/// Favorites in id order, named from the contest collection when possible
pub async fn favorites_data(session: &mut Session) -> Vec<FavoriteEntry> {
    let contests = session.repository.get_all().await;

    session
        .favorites
        .favorites()
        .iter()
        .map(|id| FavoriteEntry {
            id,
            name: contests
                .iter()
                .find(|contest| contest.id == id)
                .map(|contest| contest.name.clone()),
        })
        .collect()
}

fn format_favorites_text(entries: &[FavoriteEntry]) -> String {
    if entries.is_empty() {
        return format!(
            "\n{}\n  {}\n\n",
            "No favorite contests yet. Mark one with:".yellow(),
            "cfdash fav toggle <id>".cyan()
        );
    }

    let mut table = new_table();
    table.set_titles(row!["ID", "Name"]);
    for entry in entries {
        let name = entry
            .name
            .as_deref()
            .map(|name| truncate_text(name, 70))
            .unwrap_or_else(|| "(not in contest listing)".to_string());
        table.add_row(row![entry.id, name]);
    }

    format!("\n{table}\n")
}
