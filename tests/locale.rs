use bf_terminal::locale::{map_name, mode_name, Locale};

#[test]
fn mapped_codes_return_localized_names() {
    assert_eq!(map_name("MP_Amiens", Locale::ZhCn), "亚眠");
    assert_eq!(map_name("MP_Amiens", Locale::En), "Amiens");
    assert_eq!(map_name("MP_Suez", Locale::En), "Suez");
    assert_eq!(mode_name("Conquest0", Locale::ZhCn), "征服");
    assert_eq!(mode_name("Conquest0", Locale::En), "Conquest");
    assert_eq!(mode_name("BreakthroughLarge0", Locale::En), "Operations");
}

#[test]
fn unmapped_codes_fall_back_to_the_raw_code() {
    assert_eq!(map_name("MP_DoesNotExist", Locale::En), "MP_DoesNotExist");
    assert_eq!(map_name("MP_DoesNotExist", Locale::ZhCn), "MP_DoesNotExist");
    assert_eq!(mode_name("Frontlines9", Locale::En), "Frontlines9");
    assert_eq!(mode_name("", Locale::En), "");
}

#[test]
fn lookup_is_exact_not_fuzzy() {
    // Codes are opaque identifiers; casing differences miss the table.
    assert_eq!(map_name("mp_amiens", Locale::En), "mp_amiens");
}

#[test]
fn locale_tags_parse_leniently() {
    assert_eq!(Locale::from_tag("zh"), Locale::ZhCn);
    assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCn);
    assert_eq!(Locale::from_tag("zh_CN"), Locale::ZhCn);
    assert_eq!(Locale::from_tag("en"), Locale::En);
    assert_eq!(Locale::from_tag("en-US"), Locale::En);
    assert_eq!(Locale::from_tag(""), Locale::En);
    assert_eq!(Locale::from_tag("fr"), Locale::En);
}
