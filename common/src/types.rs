//! 植物データの型定義
//!
//! CLIとストアで共有される型:
//! - LookupResult: 外部検索の結果（キャッシュ対象）
//! - SoilLightProfile / WaterEstimate: 推定結果
//! - PlantRecord: 最終出力（ストアへ保存）

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 植物カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetable,
    Fruit,
    Flower,
    Grass,
    Ornamental,
    Herb,
    General,
}

impl Category {
    /// 全カテゴリ（判定の優先順）
    pub const ALL: [Category; 7] = [
        Category::Vegetable,
        Category::Fruit,
        Category::Flower,
        Category::Grass,
        Category::Ornamental,
        Category::Herb,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vegetable => "vegetable",
            Category::Fruit => "fruit",
            Category::Flower => "flower",
            Category::Grass => "grass",
            Category::Ornamental => "ornamental",
            Category::Herb => "herb",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == key)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// 植え付け場所
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerType {
    /// 地植え
    #[default]
    Ground,
    /// 鉢植え（水量 ×0.8）
    Pot,
}

impl ContainerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerType::Ground => "ground",
            ContainerType::Pot => "pot",
        }
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContainerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ground" => Ok(ContainerType::Ground),
            "pot" => Ok(ContainerType::Pot),
            _ => Err(Error::UnknownContainer(s.to_string())),
        }
    }
}

/// 外部検索の結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupResult {
    /// 取得元（"perenual", "wikipedia(th)" など）
    pub source: String,
    pub name: String,
    pub summary: String,
    pub image: String,
}

/// 土と日当たり
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoilLightProfile {
    pub soil: String,
    pub light: String,
}

impl SoilLightProfile {
    pub fn new(soil: &str, light: &str) -> Self {
        Self {
            soil: soil.to_string(),
            light: light.to_string(),
        }
    }
}

/// 水やり量の区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaterLevel {
    #[serde(rename = "น้อย")]
    Low,
    #[serde(rename = "ปานกลาง")]
    Medium,
    #[serde(rename = "มาก")]
    High,
}

impl WaterLevel {
    /// 基準水量（鉢補正前）から区分を決める
    pub fn from_base_ml(base_ml: f64) -> Self {
        if base_ml > 400.0 {
            WaterLevel::High
        } else if base_ml > 250.0 {
            WaterLevel::Medium
        } else {
            WaterLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WaterLevel::Low => "น้อย",
            WaterLevel::Medium => "ปานกลาง",
            WaterLevel::High => "มาก",
        }
    }
}

impl fmt::Display for WaterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 水やり量の推定結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterEstimate {
    pub level: WaterLevel,
    /// 鉢補正・丸め後のml
    pub ml: u32,
    /// 補正前の基準水量
    #[serde(skip)]
    pub base_ml: f64,
}

/// ストアへ保存する植物レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    pub display_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub image: String,
    pub soil: String,
    pub light: String,
    pub category: Category,
    pub water_level: WaterLevel,
    pub water_ml: u32,
    pub container_type: ContainerType,
    /// RFC 3339 (UTC)
    pub added_at: String,
}
