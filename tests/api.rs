use chrono::Utc;

use bf_terminal::match_fetch::{
    format_timestamp_in, match_list_path, report_url, FetchError, GameType,
};

#[test]
fn missing_player_id_fails_before_any_request() {
    assert!(matches!(
        match_list_path("", GameType::Bf1, None),
        Err(FetchError::MissingPlayerId)
    ));
    assert!(matches!(
        match_list_path("   ", GameType::Bf1, None),
        Err(FetchError::MissingPlayerId)
    ));
}

#[test]
fn unknown_game_type_is_silently_corrected() {
    let path = match_list_path("123", GameType::normalize("xyz"), None).expect("path");
    assert_eq!(path, "/api/bf1/matches/123");
}

#[test]
fn only_exact_literals_select_a_title() {
    assert_eq!(GameType::normalize("bf1"), GameType::Bf1);
    assert_eq!(GameType::normalize("bfv"), GameType::Bfv);
    assert_eq!(GameType::normalize("BFV"), GameType::Bf1);
    assert_eq!(GameType::normalize("bf5"), GameType::Bf1);
}

#[test]
fn before_cursor_appends_as_query_parameter() {
    let path = match_list_path("123", GameType::Bf1, Some("c1")).expect("path");
    assert_eq!(path, "/api/bf1/matches/123?before=c1");
}

#[test]
fn blank_cursor_is_ignored() {
    let path = match_list_path("123", GameType::Bfv, Some("  ")).expect("path");
    assert_eq!(path, "/api/bfv/matches/123");
}

#[test]
fn epoch_formats_with_two_digit_fields() {
    assert_eq!(format_timestamp_in(0, &Utc), "1970/01/01 00:00");
    assert_eq!(format_timestamp_in(1700000000, &Utc), "2023/11/14 22:13");
}

#[test]
fn report_url_matches_tracker_format() {
    assert_eq!(
        report_url("999", GameType::Bfv),
        "https://battlefieldtracker.com/bfv/gamereport/origin/999"
    );
    assert_eq!(
        report_url("8219388874", GameType::Bf1),
        "https://battlefieldtracker.com/bf1/gamereport/origin/8219388874"
    );
}
