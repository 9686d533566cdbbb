use crate::prelude::eprintln;
use cfdash_core::contest::extract_contest_id;
use cfdash_core::ContestError;
use serde::Deserialize;

use super::{json_result, JsonRpcError};
use crate::contests::list::ListOptions;
use crate::session::Session;

/// Contest given either as a JSON number or as an id/URL string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ContestArg {
    Id(u64),
    Text(String),
}

impl ContestArg {
    fn id(&self) -> Result<u64, ContestError> {
        match self {
            ContestArg::Id(id) => Ok(*id),
            ContestArg::Text(text) => extract_contest_id(text),
        }
    }
}

#[derive(Deserialize)]
struct ContestArgs {
    contest: ContestArg,
}

fn parse_args<T: for<'de> Deserialize<'de>>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    serde_json::from_value(arguments.unwrap_or(serde_json::Value::Null))
        .map_err(JsonRpcError::invalid_params)
}

fn tool_error(e: impl std::fmt::Display) -> JsonRpcError {
    JsonRpcError {
        code: -32603,
        message: format!("Tool execution error: {e}"),
        data: None,
    }
}

/// Errors a retry cannot fix are the caller's arguments
fn contest_error(e: ContestError) -> JsonRpcError {
    if e.is_retryable() {
        tool_error(e)
    } else {
        JsonRpcError::invalid_params(e)
    }
}

pub async fn handle_contests_list(
    arguments: Option<serde_json::Value>,
    session: &mut Session,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize, Default)]
    struct ContestsListArgs {
        #[serde(rename = "type")]
        contest_type: Option<String>,
        favorites: Option<bool>,
        search: Option<String>,
        limit: Option<usize>,
        page: Option<usize>,
    }

    let args: ContestsListArgs = match arguments {
        None => ContestsListArgs::default(),
        arguments => parse_args(arguments)?,
    };

    if global.verbose {
        eprintln!(
            "Calling contests_list: type={:?}, favorites={:?}, search={:?}, limit={:?}, page={:?}",
            args.contest_type, args.favorites, args.search, args.limit, args.page
        );
    }

    let options = ListOptions {
        contest_type: args.contest_type,
        favorites: args.favorites.unwrap_or(false),
        search: args.search.unwrap_or_default(),
        limit: args.limit.unwrap_or(10),
        page: args.page.unwrap_or(1),
        refresh: false,
        json: true,
    };
    let query = options.query().map_err(contest_error)?;

    let list_data = crate::contests::list_data(session, query, options.limit, options.page)
        .await
        .map_err(contest_error)?;

    json_result(&list_data)
}

pub async fn handle_contest_get(
    arguments: Option<serde_json::Value>,
    session: &mut Session,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: ContestArgs = parse_args(arguments)?;
    let id = args.contest.id().map_err(contest_error)?;

    if global.verbose {
        eprintln!("Calling contest_get: id={id}");
    }

    let detail = crate::contests::show_data(session, id)
        .await
        .map_err(tool_error)?;

    json_result(&detail)
}

pub fn handle_favorites_toggle(
    arguments: Option<serde_json::Value>,
    session: &mut Session,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let args: ContestArgs = parse_args(arguments)?;
    let id = args.contest.id().map_err(contest_error)?;

    if global.verbose {
        eprintln!("Calling favorites_toggle: id={id}");
    }

    let output = crate::contests::toggle_data(session, id).map_err(tool_error)?;

    json_result(&output)
}

pub async fn handle_favorites_list(
    session: &mut Session,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    if global.verbose {
        eprintln!("Calling favorites_list");
    }

    let entries = crate::contests::favorites_data(session).await;

    json_result(&entries)
}

pub async fn handle_contests_refresh(
    session: &mut Session,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    if global.verbose {
        eprintln!("Calling contests_refresh");
    }

    let count = crate::contests::cache::refresh_data(session)
        .await
        .map_err(tool_error)?;

    json_result(&serde_json::json!({ "cached_contests": count }))
}
