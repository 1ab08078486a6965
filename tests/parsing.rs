use std::fs;
use std::path::PathBuf;

use bf_terminal::match_fetch::{parse_match_list_json, parse_match_rows, FetchError};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_match_list_fixture() {
    let raw = read_fixture("bf1_matches.json");
    let records = parse_match_list_json(&raw).expect("fixture should parse");
    assert_eq!(records.len(), 3);

    let rows = parse_match_rows(&records);
    assert_eq!(rows.len(), 3);

    assert_eq!(rows[0].match_id, "8219388874");
    assert_eq!(rows[0].map_code, "MP_Amiens");
    assert_eq!(rows[0].mode_code, "Conquest0");
    assert_eq!(rows[0].server, "[DICE] Official Conquest #4");
    assert_eq!(rows[0].timestamp, Some(1700000000));
}

#[test]
fn string_timestamps_and_unknown_codes_survive() {
    let raw = read_fixture("bf1_matches.json");
    let rows = parse_match_rows(&parse_match_list_json(&raw).expect("fixture should parse"));

    // Codes newer than the locale tables pass through as-is.
    assert_eq!(rows[1].map_code, "MP_BrandNew");
    assert_eq!(rows[1].timestamp, Some(1699990000));
}

#[test]
fn records_with_missing_keys_degrade_to_empty_fields() {
    let raw = read_fixture("bf1_matches.json");
    let rows = parse_match_rows(&parse_match_list_json(&raw).expect("fixture should parse"));

    assert_eq!(rows[2].match_id, "12345");
    assert_eq!(rows[2].map_code, "MP_Suez");
    assert_eq!(rows[2].server, "");
    assert_eq!(rows[2].timestamp, None);
}

#[test]
fn null_and_empty_bodies_are_empty_pages() {
    assert!(parse_match_list_json("null").expect("null parses").is_empty());
    assert!(parse_match_list_json("").expect("empty parses").is_empty());
    assert!(parse_match_list_json("  []  ").expect("array parses").is_empty());
}

#[test]
fn non_array_bodies_are_decode_errors() {
    assert!(matches!(
        parse_match_list_json("{\"error\":\"nope\"}"),
        Err(FetchError::Decode(_))
    ));
    assert!(matches!(
        parse_match_list_json("not json at all"),
        Err(FetchError::Decode(_))
    ));
}
