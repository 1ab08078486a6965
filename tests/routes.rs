use bf_terminal::match_fetch::GameType;
use bf_terminal::routes::Route;

#[test]
fn player_matches_path_parses() {
    let route = Route::parse("/bf1/matches/42");
    assert_eq!(
        route,
        Route::PlayerMatches {
            game_type: GameType::Bf1,
            player_id: "42".to_string(),
        }
    );
}

#[test]
fn unknown_game_type_normalizes_to_bf1() {
    let route = Route::parse("/bogus/matches/42");
    assert_eq!(
        route,
        Route::PlayerMatches {
            game_type: GameType::Bf1,
            player_id: "42".to_string(),
        }
    );
}

#[test]
fn bfv_path_keeps_bfv() {
    let route = Route::parse("/bfv/matches/CrazyCat");
    assert_eq!(
        route,
        Route::PlayerMatches {
            game_type: GameType::Bfv,
            player_id: "CrazyCat".to_string(),
        }
    );
}

#[test]
fn root_is_home() {
    assert_eq!(Route::parse("/"), Route::Home);
    assert_eq!(Route::parse(""), Route::Home);
}

#[test]
fn unknown_paths_fall_back_to_home() {
    assert_eq!(Route::parse("/about"), Route::Home);
    assert_eq!(Route::parse("/bf1/matches"), Route::Home);
    assert_eq!(Route::parse("/bf1/stats/42"), Route::Home);
}

#[test]
fn trailing_slash_is_tolerated() {
    let route = Route::parse("/bf1/matches/42/");
    assert!(matches!(route, Route::PlayerMatches { .. }));
}

#[test]
fn params_only_exist_for_matches_route() {
    assert!(Route::parse("/").params().is_none());

    let params = Route::parse("/bfv/matches/42").params().expect("params");
    assert_eq!(params.game_type, GameType::Bfv);
    assert_eq!(params.player_id, "42");
    assert!(params.direct_access);
}

#[test]
fn path_round_trips_for_matches_route() {
    let route = Route::parse("/bfv/matches/42");
    assert_eq!(route.path(), "/bfv/matches/42");
    assert_eq!(Route::parse(&route.path()), route);
}
