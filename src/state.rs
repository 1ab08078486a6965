use std::collections::{HashSet, VecDeque};

use crate::locale::Locale;
use crate::match_fetch::{report_url, GameType, MatchRow};
use crate::routes::RouteParams;

const LOG_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Matches,
}

/// State changes pushed from the provider thread to the UI loop.
#[derive(Debug, Clone)]
pub enum Delta {
    SetMatches(Vec<MatchRow>),
    AppendMatches(Vec<MatchRow>),
    FetchFailed(String),
    Log(String),
}

/// Work requested from the UI loop. Each command is an independent request;
/// completions land in whatever order they land and the newest write wins.
#[derive(Debug, Clone)]
pub enum ProviderCommand {
    FetchMatches {
        player_id: String,
        game_type: GameType,
        before: Option<String>,
    },
}

pub struct AppState {
    pub screen: Screen,
    pub locale: Locale,
    pub input: String,
    pub player_id: String,
    pub game_type: GameType,
    pub rows: Vec<MatchRow>,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub logs: VecDeque<String>,
}

impl AppState {
    pub fn new(locale: Locale) -> Self {
        Self {
            screen: Screen::Home,
            locale,
            input: String::new(),
            player_id: String::new(),
            game_type: GameType::Bf1,
            rows: Vec::new(),
            selected: 0,
            loading: false,
            error: None,
            logs: VecDeque::new(),
        }
    }

    /// Deep-link construction: the matches view gets its parameters here,
    /// before the first draw, so nothing has to observe them after the fact.
    pub fn with_route(locale: Locale, params: Option<RouteParams>) -> Self {
        let mut state = Self::new(locale);
        if let Some(params) = params {
            state.screen = Screen::Matches;
            state.input = params.player_id.clone();
            state.player_id = params.player_id;
            state.game_type = params.game_type;
            state.loading = true;
        }
        state
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.logs.push_front(line.into());
        while self.logs.len() > LOG_CAPACITY {
            self.logs.pop_back();
        }
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() && self.selected + 1 < self.rows.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_row(&self) -> Option<&MatchRow> {
        self.rows.get(self.selected)
    }

    pub fn selected_report_url(&self) -> Option<String> {
        self.selected_row()
            .filter(|row| !row.match_id.is_empty())
            .map(|row| report_url(&row.match_id, self.game_type))
    }

    /// Pagination cursor for the next older page: the oldest timestamp seen
    /// so far. None when nothing timestamped has been fetched yet.
    pub fn before_cursor(&self) -> Option<String> {
        self.rows
            .iter()
            .filter_map(|row| row.timestamp)
            .min()
            .map(|ts| ts.to_string())
    }
}

pub fn apply_delta(state: &mut AppState, delta: Delta) {
    match delta {
        Delta::SetMatches(rows) => {
            state.rows = rows;
            state.selected = 0;
            state.loading = false;
            state.error = None;
        }
        Delta::AppendMatches(rows) => {
            let seen: HashSet<String> = state
                .rows
                .iter()
                .map(|row| row.match_id.clone())
                .collect();
            state.rows.extend(
                rows.into_iter()
                    .filter(|row| row.match_id.is_empty() || !seen.contains(&row.match_id)),
            );
            state.loading = false;
            state.error = None;
        }
        Delta::FetchFailed(message) => {
            state.loading = false;
            state.error = Some(message.clone());
            state.push_log(format!("[WARN] {message}"));
        }
        Delta::Log(line) => state.push_log(line),
    }
}
