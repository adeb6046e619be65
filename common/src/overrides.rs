//! 既知の植物名による上書きテーブル
//!
//! キーは植物名の部分文字列。先頭から順に照合し、最初に含まれたものを採用する。

/// 土・日当たりの上書き (名前, (土, 日当たり))
pub const SOIL_LIGHT_OVERRIDES: &[(&str, (&str, &str))] = &[
    // ผักสวนครัว
    ("กะเพรา", ("ดินร่วนซุย", "แดดเต็มวัน")),
    ("โหระพา", ("ดินร่วนระบายน้ำดี", "แดดเต็มวัน")),
    ("สะระแหน่", ("ดินร่วนชื้น", "แดดรำไร")),
    ("ผักชี", ("ดินร่วนปนทราย", "แดดเต็มวัน")),
    ("ต้นหอม", ("ดินร่วนซุย", "แดดเต็มวัน")),
    ("คะน้า", ("ดินร่วนปนทราย", "แดดเต็มวัน")),
    // ไม้ดอก
    ("กุหลาบ", ("ดินร่วนปนทราย", "แดดเต็มวัน")),
    ("กล้วยไม้", ("ดินกล้วยไม้", "แสงรำไร")),
    ("มะลิ", ("ดินร่วน", "แดดเต็มวัน")),
    ("เบญจมาศ", ("ดินร่วนระบายน้ำดี", "แดดเต็มวัน")),
    ("แก้ว", ("ดินร่วน", "แดดรำไร")),
    // ไม้ผล
    ("มะม่วง", ("ดินร่วนปนทราย", "แดดเต็มวัน")),
    ("มะละกอ", ("ดินร่วนระบายน้ำดี", "แดดเต็มวัน")),
    ("ทุเรียน", ("ดินร่วนชื้น", "แดดเต็มวัน")),
];

/// 1日あたりの基準水量(ml)の上書き
pub const WATER_OVERRIDES: &[(&str, u32)] = &[
    ("กะเพรา", 250),
    ("โหระพา", 250),
    ("สะระแหน่", 300),
    ("ผักชี", 200),
    ("ต้นหอม", 180),
    ("คะน้า", 350),
    ("กุหลาบ", 400),
    ("กล้วยไม้", 150),
    ("มะลิ", 300),
    ("เบญจมาศ", 280),
    ("แก้ว", 320),
    ("มะม่วง", 500),
    ("มะละกอ", 450),
    ("ทุเรียน", 600),
];

/// 植物名を照合用に正規化
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// 名前に含まれる最初のキーの値を返す
pub fn find_override<'a, T>(table: &'a [(&'a str, T)], plant_name: &str) -> Option<&'a T> {
    let name = normalize_name(plant_name);
    table
        .iter()
        .find(|(key, _)| name.contains(key))
        .map(|(_, value)| value)
}

/// 土・日当たりの上書きを検索
pub fn find_soil_light(plant_name: &str) -> Option<(&'static str, &'static str)> {
    find_override(SOIL_LIGHT_OVERRIDES, plant_name).copied()
}

/// 基準水量の上書きを検索
pub fn find_water_ml(plant_name: &str) -> Option<u32> {
    find_override(WATER_OVERRIDES, plant_name).copied()
}
