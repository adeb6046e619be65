//! 水やり量の推定
//!
//! 上書きテーブルに無い植物は、カテゴリごとの範囲から乱数で基準水量を決める。
//! 乱数源は引数で受け取るので、テストではシード固定のRNGを渡せる。

use crate::overrides::find_water_ml;
use crate::types::{Category, ContainerType, WaterEstimate, WaterLevel};
use rand::Rng;

/// 鉢植えの補正係数
pub const POT_FACTOR: f64 = 0.8;

/// カテゴリ別の基準水量範囲 (下限ml, 幅ml)
pub fn base_range(category: Category) -> (f64, f64) {
    match category {
        Category::Vegetable => (200.0, 80.0),
        Category::Fruit => (450.0, 150.0),
        Category::Flower => (300.0, 100.0),
        Category::Herb => (250.0, 80.0),
        Category::Grass => (350.0, 100.0),
        Category::Ornamental => (280.0, 120.0),
        Category::General => (250.0, 100.0),
    }
}

/// 基準水量に鉢補正を掛けて丸める
pub fn adjust_for_container(base_ml: f64, container: ContainerType) -> u32 {
    let adjusted = match container {
        ContainerType::Pot => base_ml * POT_FACTOR,
        ContainerType::Ground => base_ml,
    };
    adjusted.round().max(1.0) as u32
}

/// 基準水量から推定結果を組み立てる
pub fn estimate_from_base(base_ml: f64, container: ContainerType) -> WaterEstimate {
    WaterEstimate {
        level: WaterLevel::from_base_ml(base_ml),
        ml: adjust_for_container(base_ml, container),
        base_ml,
    }
}

/// 水やり量を推定する
pub fn estimate_water<R: Rng + ?Sized>(
    category: Category,
    container: ContainerType,
    plant_name: &str,
    rng: &mut R,
) -> WaterEstimate {
    if let Some(ml) = find_water_ml(plant_name) {
        return estimate_from_base(f64::from(ml), container);
    }

    let (low, span) = base_range(category);
    let base_ml = low + rng.gen::<f64>() * span;
    estimate_from_base(base_ml, container)
}
