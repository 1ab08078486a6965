use crate::match_fetch::GameType;

/// The two views the app knows about. Any path that does not match the
/// player-matches shape lands on Home; the original UI had no 404 state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    PlayerMatches {
        game_type: GameType,
        player_id: String,
    },
}

/// Parameters a deep link carries into the matches view. Resolved from the
/// path before the app state is constructed, so the view reads them at
/// startup rather than through any shared side-channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParams {
    pub game_type: GameType,
    pub player_id: String,
    pub direct_access: bool,
}

impl Route {
    /// Total parse of a URL-style path. `/{gameType}/matches/{playerId}`
    /// selects the matches view; the gameType segment is normalized the same
    /// way the API client normalizes it (unknown values become bf1, never an
    /// error). Everything else is Home.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [game_type, "matches", player_id] if !player_id.is_empty() => Route::PlayerMatches {
                game_type: GameType::normalize(game_type),
                player_id: (*player_id).to_string(),
            },
            _ => Route::Home,
        }
    }

    /// Deep-link parameters, when the route targets the matches view.
    pub fn params(&self) -> Option<RouteParams> {
        match self {
            Route::Home => None,
            Route::PlayerMatches {
                game_type,
                player_id,
            } => Some(RouteParams {
                game_type: *game_type,
                player_id: player_id.clone(),
                direct_access: true,
            }),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::PlayerMatches {
                game_type,
                player_id,
            } => format!("/{}/matches/{player_id}", game_type.as_str()),
        }
    }
}
