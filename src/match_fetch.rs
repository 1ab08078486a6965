use std::env;
use std::fmt;

use chrono::{Local, LocalResult, TimeZone, Utc};
use reqwest::header::{CACHE_CONTROL, PRAGMA, USER_AGENT};
use serde_json::Value;
use thiserror::Error;

use crate::http_client::http_client;

const DEFAULT_API_BASE: &str = "https://battlefield.vantage.wtf";
const TRACKER_BASE: &str = "https://battlefieldtracker.com";

/// Which title's backend namespace to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameType {
    #[default]
    Bf1,
    Bfv,
}

impl GameType {
    /// Only the exact literals are accepted; anything else is silently
    /// coerced to bf1. Deliberate leniency, not validation.
    pub fn normalize(raw: &str) -> GameType {
        match raw {
            "bfv" => GameType::Bfv,
            _ => GameType::Bf1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Bf1 => "bf1",
            GameType::Bfv => "bfv",
        }
    }

    pub fn toggled(self) -> GameType {
        match self {
            GameType::Bf1 => GameType::Bfv,
            GameType::Bfv => GameType::Bf1,
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("missing playerId parameter")]
    MissingPlayerId,
    #[error("api request failed: http {status}")]
    Http { status: u16 },
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// One match list entry projected out of the backend's opaque record.
/// Every field is best-effort; the record shape is owned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    pub match_id: String,
    pub map_code: String,
    pub mode_code: String,
    pub server: String,
    pub timestamp: Option<i64>,
}

/// Request path for one page of match history. Pure, so the playerId check
/// happens before any network activity.
pub fn match_list_path(
    player_id: &str,
    game_type: GameType,
    before: Option<&str>,
) -> Result<String, FetchError> {
    let player_id = player_id.trim();
    if player_id.is_empty() {
        return Err(FetchError::MissingPlayerId);
    }

    let mut path = format!("/api/{}/matches/{player_id}", game_type.as_str());
    if let Some(before) = before.map(str::trim).filter(|cursor| !cursor.is_empty()) {
        path.push_str("?before=");
        path.push_str(before);
    }
    Ok(path)
}

/// Fetches one page of match history as the backend's raw record sequence.
/// Match histories are append-only, so every request bypasses caches with a
/// timestamp query parameter plus no-cache headers. Errors surface to the
/// caller unchanged; there is no retry.
pub fn fetch_match_list(
    player_id: &str,
    game_type: GameType,
    before: Option<&str>,
) -> Result<Vec<Value>, FetchError> {
    let path = match_list_path(player_id, game_type, before)?;
    let client = http_client()?;

    let sep = if path.contains('?') { '&' } else { '?' };
    let url = format!(
        "{}{path}{sep}_nocache={}",
        api_base(),
        Utc::now().timestamp_millis()
    );

    let resp = client
        .get(&url)
        .header(USER_AGENT, "Mozilla/5.0")
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Http {
            status: status.as_u16(),
        });
    }

    let body = resp.text()?;
    parse_match_list_json(&body)
}

/// Kept separate from the transport so fixture bodies can be parsed in
/// tests. Empty and `null` bodies read as an empty page.
pub fn parse_match_list_json(raw: &str) -> Result<Vec<Value>, FetchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Vec::new());
    }
    let value: Value =
        serde_json::from_str(trimmed).map_err(|err| FetchError::Decode(err.to_string()))?;
    match value {
        Value::Array(items) => Ok(items),
        other => Err(FetchError::Decode(format!(
            "expected a match array, got {other}"
        ))),
    }
}

/// Projects opaque records into display rows. Missing keys degrade to empty
/// fields rather than errors.
pub fn parse_match_rows(records: &[Value]) -> Vec<MatchRow> {
    records
        .iter()
        .map(|record| MatchRow {
            match_id: pick_string(record, &["gameId", "matchId", "id"]).unwrap_or_default(),
            map_code: pick_string(record, &["mapName", "map"]).unwrap_or_default(),
            mode_code: pick_string(record, &["gameMode", "mode"]).unwrap_or_default(),
            server: pick_string(record, &["serverName", "server", "name"]).unwrap_or_default(),
            timestamp: pick_i64(record, &["timestamp", "createdTimestamp", "time"]),
        })
        .collect()
}

/// Local-time `YYYY/MM/DD HH:MM` rendering of a Unix timestamp in seconds.
pub fn format_timestamp(unix_seconds: i64) -> String {
    format_timestamp_in(unix_seconds, &Local)
}

pub fn format_timestamp_in<Tz: TimeZone>(unix_seconds: i64, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    match tz.timestamp_opt(unix_seconds, 0) {
        LocalResult::Single(dt) => dt.format("%Y/%m/%d %H:%M").to_string(),
        _ => unix_seconds.to_string(),
    }
}

/// Deep link into the battlefieldtracker report viewer. Constructed only,
/// never fetched; matchId passes through unvalidated.
pub fn report_url(match_id: &str, game_type: GameType) -> String {
    format!(
        "{TRACKER_BASE}/{}/gamereport/origin/{match_id}",
        game_type.as_str()
    )
}

pub fn api_base() -> String {
    match env::var("APP_API_BASE") {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

fn pick_string(value: &Value, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(v) = value.get(*key) {
            match v {
                Value::String(s) if !s.trim().is_empty() => return Some(s.trim().to_string()),
                Value::Number(n) => return Some(n.to_string()),
                _ => {}
            }
        }
    }
    None
}

fn pick_i64(value: &Value, keys: &[&str]) -> Option<i64> {
    for key in keys {
        if let Some(v) = value.get(*key) {
            if let Some(num) = v.as_i64() {
                return Some(num);
            }
            if let Some(s) = v.as_str() {
                if let Ok(num) = s.trim().parse::<i64>() {
                    return Some(num);
                }
            }
        }
    }
    None
}
