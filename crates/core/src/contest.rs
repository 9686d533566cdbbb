use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ContestError;

/// Contest category as reported by the Codeforces API
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContestType {
    CF,
    IOI,
    ICPC,
    Other(String),
}

impl ContestType {
    pub fn as_str(&self) -> &str {
        match self {
            ContestType::CF => "CF",
            ContestType::IOI => "IOI",
            ContestType::ICPC => "ICPC",
            ContestType::Other(value) => value,
        }
    }

    /// Parse a user supplied filter value, case-insensitively.
    pub fn parse_filter(value: &str) -> Result<Self, ContestError> {
        match value.to_ascii_uppercase().as_str() {
            "CF" | "CODEFORCES" => Ok(ContestType::CF),
            "IOI" => Ok(ContestType::IOI),
            "ICPC" => Ok(ContestType::ICPC),
            _ => Err(ContestError::InvalidArgument(format!(
                "Invalid contest type: {value}. Valid types: cf, ioi, icpc"
            ))),
        }
    }
}

impl From<String> for ContestType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CF" => ContestType::CF,
            "IOI" => ContestType::IOI,
            "ICPC" => ContestType::ICPC,
            _ => ContestType::Other(value),
        }
    }
}

impl From<ContestType> for String {
    fn from(value: ContestType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ContestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a contest
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContestPhase {
    Before,
    Coding,
    PendingSystemTest,
    SystemTest,
    Finished,
    Other(String),
}

impl ContestPhase {
    pub fn as_str(&self) -> &str {
        match self {
            ContestPhase::Before => "BEFORE",
            ContestPhase::Coding => "CODING",
            ContestPhase::PendingSystemTest => "PENDING_SYSTEM_TEST",
            ContestPhase::SystemTest => "SYSTEM_TEST",
            ContestPhase::Finished => "FINISHED",
            ContestPhase::Other(value) => value,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, ContestPhase::Finished)
    }
}

impl From<String> for ContestPhase {
    fn from(value: String) -> Self {
        match value.as_str() {
            "BEFORE" => ContestPhase::Before,
            "CODING" => ContestPhase::Coding,
            "PENDING_SYSTEM_TEST" => ContestPhase::PendingSystemTest,
            "SYSTEM_TEST" => ContestPhase::SystemTest,
            "FINISHED" => ContestPhase::Finished,
            _ => ContestPhase::Other(value),
        }
    }
}

impl From<ContestPhase> for String {
    fn from(value: ContestPhase) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ContestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contest entry from the `contest.list` API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contest {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub contest_type: ContestType,
    pub phase: ContestPhase,
    pub frozen: bool,
    pub duration_seconds: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_time_seconds: Option<i64>,
}

/// Envelope returned by every Codeforces API method
#[derive(Debug, Deserialize)]
pub struct ContestListResponse {
    pub status: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub result: Option<Vec<Contest>>,
}

/// Validate a `contest.list` response body and extract the collection.
///
/// A body that is not valid JSON, lacks `result` on success, holds a contest
/// with missing or mistyped fields, or repeats a contest id is a `Parse`
/// error. A well-formed envelope whose `status` is not `OK` is a `Network`
/// error since the remote refused the request.
pub fn parse_contest_list(body: &str) -> Result<Vec<Contest>, ContestError> {
    let response: ContestListResponse =
        serde_json::from_str(body).map_err(|e| ContestError::Parse(e.to_string()))?;

    if response.status != "OK" {
        return Err(ContestError::Network(match response.comment {
            Some(comment) => format!("API returned status {}: {comment}", response.status),
            None => format!("API returned status {}", response.status),
        }));
    }

    let contests = response
        .result
        .ok_or_else(|| ContestError::Parse("missing `result` field".to_string()))?;

    ensure_unique_ids(&contests)?;

    Ok(contests)
}

/// Reject a collection in which two contests share an id
pub fn ensure_unique_ids(contests: &[Contest]) -> Result<(), ContestError> {
    let mut seen = HashSet::with_capacity(contests.len());
    for contest in contests {
        if !seen.insert(contest.id) {
            return Err(ContestError::Parse(format!(
                "duplicate contest id {}",
                contest.id
            )));
        }
    }

    Ok(())
}

/// Convert a Unix timestamp to a formatted UTC string
pub fn format_start_time(timestamp: Option<i64>) -> Option<String> {
    timestamp.and_then(|ts| {
        let dt = DateTime::<Utc>::from_timestamp(ts, 0)?;
        Some(dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    })
}

pub fn duration_hours(duration_seconds: u64) -> f64 {
    duration_seconds as f64 / 3600.0
}

pub fn frozen_label(frozen: bool) -> &'static str {
    if frozen {
        "Frozen"
    } else {
        "Not Frozen"
    }
}

/// Extract a contest id from a bare number or a Codeforces contest URL
///
/// Accepts "1900", "https://codeforces.com/contest/1900" and
/// "https://codeforces.com/gym/104114/problem/A".
pub fn extract_contest_id(input: &str) -> Result<u64, ContestError> {
    let input = input.trim();
    if let Ok(id) = input.parse::<u64>() {
        return Ok(id);
    }

    let re = Regex::new(r"/(?:contest|gym)/(\d+)")
        .map_err(|e| ContestError::InvalidArgument(e.to_string()))?;
    if let Some(id_match) = re.captures(input).and_then(|caps| caps.get(1)) {
        return id_match
            .as_str()
            .parse::<u64>()
            .map_err(|_| ContestError::InvalidArgument("Failed to parse contest ID from URL".to_string()));
    }

    Err(ContestError::InvalidArgument(format!(
        "Invalid contest ID or URL: {input}"
    )))
}

/// Detail view of a single contest
#[derive(Debug, Serialize, Clone)]
pub struct ContestDetail {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub contest_type: String,
    pub phase: String,
    pub finished: bool,
    pub start_time: Option<String>,
    pub duration_hours: String,
    pub frozen: bool,
    pub status: String,
    pub favorite: bool,
}

pub fn build_contest_detail(contest: &Contest, favorite: bool) -> ContestDetail {
    ContestDetail {
        id: contest.id,
        name: contest.name.clone(),
        contest_type: contest.contest_type.to_string(),
        phase: contest.phase.to_string(),
        finished: contest.phase.is_finished(),
        start_time: format_start_time(contest.start_time_seconds),
        duration_hours: format!("{:.2}", duration_hours(contest.duration_seconds)),
        frozen: contest.frozen,
        status: frozen_label(contest.frozen).to_string(),
        favorite,
    }
}
