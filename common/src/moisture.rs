//! 土壌水分によるアドバイス

use serde::Serialize;

/// 至急水やりが必要な閾値(%)
pub const URGENT_BELOW: f64 = 30.0;
/// 適正範囲の上限(%)
pub const ADEQUATE_BELOW: f64 = 60.0;
/// 高温警告の閾値(°C)
pub const HIGH_TEMPERATURE_C: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoistureAdvice {
    /// 至急水やり
    Urgent,
    /// 適正
    Adequate,
    /// 十分に湿っている
    Saturated,
}

impl MoistureAdvice {
    pub fn status(&self) -> &'static str {
        match self {
            MoistureAdvice::Urgent => "จำเป็นต้องรดน้ำด่วน",
            MoistureAdvice::Adequate => "ความชื้นพอเหมาะ",
            MoistureAdvice::Saturated => "ดินชื้นเพียงพอ",
        }
    }

    /// 土壌水分(%)を添えた説明文
    pub fn message(&self, soil_pct: f64) -> String {
        match self {
            MoistureAdvice::Urgent => format!("ความชื้นดินต่ำมาก ({}%) ควรรดน้ำทันที", soil_pct),
            MoistureAdvice::Adequate => format!("ความชื้นดินอยู่ในระดับดี ({}%)", soil_pct),
            MoistureAdvice::Saturated => format!("ความชื้นดินสูง ({}%) ไม่ควรรดน้ำเพิ่ม", soil_pct),
        }
    }
}

pub fn advise(soil_pct: f64) -> MoistureAdvice {
    if soil_pct < URGENT_BELOW {
        MoistureAdvice::Urgent
    } else if soil_pct < ADEQUATE_BELOW {
        MoistureAdvice::Adequate
    } else {
        MoistureAdvice::Saturated
    }
}

/// センサー値として有効な土壌水分(0〜100%)か
pub fn is_valid_moisture(soil_pct: f64) -> bool {
    (0.0..=100.0).contains(&soil_pct)
}

pub fn is_high_temperature(temperature_c: f64) -> bool {
    temperature_c > HIGH_TEMPERATURE_C
}
