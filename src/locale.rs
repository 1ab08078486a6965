use std::collections::HashMap;
use std::env;

use once_cell::sync::Lazy;

/// Display language for map and mode names. The raw codes coming off the
/// backend are the same for both titles; only the labels differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    ZhCn,
}

impl Locale {
    /// Reads `APP_LOCALE`. Anything that is not a recognized Chinese tag
    /// falls back to English.
    pub fn from_env() -> Self {
        match env::var("APP_LOCALE") {
            Ok(raw) => Self::from_tag(&raw),
            Err(_) => Locale::En,
        }
    }

    pub fn from_tag(raw: &str) -> Self {
        let tag = raw.trim().to_lowercase().replace('_', "-");
        match tag.as_str() {
            "zh" | "zh-cn" | "zh-hans" => Locale::ZhCn,
            _ => Locale::En,
        }
    }
}

struct Entry {
    en: &'static str,
    zh: &'static str,
}

fn insert(map: &mut HashMap<&'static str, Entry>, code: &'static str, en: &'static str, zh: &'static str) {
    map.insert(code, Entry { en, zh });
}

static MAP_NAMES: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // Base game
    insert(&mut m, "MP_Amiens", "Amiens", "亚眠");
    insert(&mut m, "MP_Chateau", "Ballroom Blitz", "流血宴厅");
    insert(&mut m, "MP_Desert", "Sinai Desert", "西奈沙漠");
    insert(&mut m, "MP_FaoFortress", "Fao Fortress", "法欧堡");
    insert(&mut m, "MP_Forest", "Argonne Forest", "阿尔贡森林");
    insert(&mut m, "MP_ItalianCoast", "Empire's Edge", "帝国边境");
    insert(&mut m, "MP_MountainFort", "Monte Grappa", "格拉巴山");
    insert(&mut m, "MP_Scar", "St Quentin Scar", "圣康坦的伤痕");
    insert(&mut m, "MP_Suez", "Suez", "苏伊士");
    insert(&mut m, "MP_Giant", "Giant's Shadow", "庞然暗影");

    // They Shall Not Pass
    insert(&mut m, "MP_Fields", "Soissons", "苏瓦松");
    insert(&mut m, "MP_Graveyard", "Rupture", "决裂");
    insert(&mut m, "MP_Underworld", "Fort De Vaux", "法乌克斯要塞");
    insert(&mut m, "MP_Verdun", "Verdun Heights", "凡尔登高地");

    // In the Name of the Tsar
    insert(&mut m, "MP_ShovelTown", "Prise de Tahure", "攻占托尔");
    insert(&mut m, "MP_Trench", "Nivelle Nights", "尼维尔之夜");
    insert(&mut m, "MP_Bridge", "Brusilov Keep", "勃鲁西洛夫关口");
    insert(&mut m, "MP_Islands", "Albion", "阿尔比恩");
    insert(&mut m, "MP_Ravines", "Lupkow Pass", "武普库夫山口");
    insert(&mut m, "MP_Tsaritsyn", "Tsaritsyn", "察里津");
    insert(&mut m, "MP_Valley", "Galicia", "加利西亚");
    insert(&mut m, "MP_Volga", "Volga River", "窝瓦河");

    // Turning Tides
    insert(&mut m, "MP_Beachhead", "Cape Helles", "海丽丝岬");
    insert(&mut m, "MP_Harbor", "Zeebrugge", "泽布吕赫");
    insert(&mut m, "MP_Ridge", "Achi Baba", "阿奇巴巴");
    insert(&mut m, "MP_River", "Caporetto", "卡波雷托");

    // Apocalypse
    insert(&mut m, "MP_Hell", "Passchendaele", "帕斯尚尔");
    insert(&mut m, "MP_Offensive", "River Somme", "索姆河");
    insert(&mut m, "MP_Naval", "Heligoland Bight", "黑尔戈兰湾");
    insert(&mut m, "MP_Blitz", "London Calling: Night Raid", "伦敦的呼唤：夜袭");
    insert(&mut m, "MP_London", "London Calling: Scourge", "伦敦的呼唤：灾祸");
    insert(&mut m, "MP_Alps", "Razor's Edge", "剃刀边缘");

    m
});

static MODE_NAMES: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    let mut m = HashMap::new();

    insert(&mut m, "Conquest0", "Conquest", "征服");
    insert(&mut m, "TeamDeathMatch0", "Team Deathmatch", "团队死斗");
    insert(&mut m, "BreakthroughLarge0", "Operations", "行动模式");
    insert(&mut m, "Breakthrough0", "Shock Operations", "闪击行动");
    insert(&mut m, "TugOfWar0", "Frontlines", "前线");
    insert(&mut m, "Possession0", "War Pigeons", "战争信鸽");
    insert(&mut m, "Domination0", "Domination", "抢攻");
    insert(&mut m, "Rush0", "Rush", "突袭");
    insert(&mut m, "ZoneControl0", "Supply Drop", "空降补给");
    insert(&mut m, "AirAssault0", "Air Assault", "空中突击");

    m
});

/// Localized map name. Unknown codes come back unchanged; backend data can
/// carry codes newer than these tables and a raw `MP_*` label is still
/// readable in a row.
pub fn map_name(code: &str, locale: Locale) -> &str {
    lookup(&MAP_NAMES, code, locale)
}

/// Localized mode name, same fallback contract as [`map_name`].
pub fn mode_name(code: &str, locale: Locale) -> &str {
    lookup(&MODE_NAMES, code, locale)
}

fn lookup<'a>(table: &'a HashMap<&'static str, Entry>, code: &'a str, locale: Locale) -> &'a str {
    match table.get(code) {
        Some(entry) => match locale {
            Locale::En => entry.en,
            Locale::ZhCn => entry.zh,
        },
        None => code,
    }
}
