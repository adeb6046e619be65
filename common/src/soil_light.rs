//! 土・日当たりの推定
//!
//! 1. 植物名の上書きテーブル
//! 2. 説明文のキーワード
//! 3. カテゴリ既定値

use crate::overrides::find_soil_light;
use crate::types::{Category, SoilLightProfile};

/// 説明文キーワード → (土, 日当たり)。先頭から順に判定
const KEYWORD_RULES: &[(&[&str], &str, &str)] = &[
    (&["แดดจัด", "full sun"], "ดินร่วนปนทราย", "แดดเต็มวัน"),
    (&["ร่ม", "รำไร", "partial shade", "shade"], "ดินร่วนชื้น", "แสงรำไร"),
    (&["ชื้น", "moist"], "ดินร่วนชื้น", "แดดรำไร"),
    (&["แห้ง", "dry"], "ดินร่วนปนทราย", "แดดเต็มวัน"),
];

/// カテゴリ既定の土・日当たり
pub fn category_default(category: Category) -> SoilLightProfile {
    let (soil, light) = match category {
        Category::Vegetable => ("ดินร่วนซุย", "แดดเต็มวัน"),
        Category::Fruit => ("ดินร่วนปนทราย", "แดดเต็มวัน"),
        Category::Flower => ("ดินร่วนระบายน้ำดี", "แดดเต็มวัน"),
        Category::Herb => ("ดินร่วนซุย", "แดดเต็มวัน"),
        Category::Grass => ("ดินร่วนทั่วไป", "แดดเต็มวัน"),
        Category::Ornamental => ("ดินร่วน", "แดดรำไร"),
        Category::General => ("ดินร่วนทั่วไป", "แดดปานกลาง"),
    };
    SoilLightProfile::new(soil, light)
}

/// 土・日当たりを推定する（常に何らかの値を返す）
pub fn infer_soil_light(plant_name: &str, summary: &str, category: Category) -> SoilLightProfile {
    if let Some((soil, light)) = find_soil_light(plant_name) {
        return SoilLightProfile::new(soil, light);
    }

    let desc = summary.to_lowercase();
    for (keywords, soil, light) in KEYWORD_RULES {
        if keywords.iter().any(|k| desc.contains(k)) {
            return SoilLightProfile::new(soil, light);
        }
    }

    category_default(category)
}
