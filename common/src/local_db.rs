//! 組み込みの植物候補カタログ
//!
//! ネットワーク無しで候補を提示するための小さな辞書。

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalSource {
    /// 完全一致
    Local,
    /// 部分一致による候補
    LocalSuggested,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalPlant {
    pub name: String,
    pub watering: &'static str,
    pub sunlight: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub water_per_day: u32,
    pub soil: &'static str,
    pub source: LocalSource,
}

struct Entry {
    name: &'static str,
    watering: &'static str,
    sunlight: &'static str,
    description: &'static str,
    image_url: &'static str,
    water_per_day: u32,
    soil: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        name: "ต้นหอม",
        watering: "ปานกลาง",
        sunlight: "แสงแดดรำไร",
        description: "พืชสมุนไพรใช้ประกอบอาหาร ปลูกง่าย โตเร็ว ต้องการน้ำพอประมาณ",
        image_url: "https://img.freepik.com/free-photo/green-spring-onions_1353-238.jpg?w=200",
        water_per_day: 120,
        soil: "ดินร่วนซุย",
    },
    Entry {
        name: "โหระพา",
        watering: "ปานกลาง",
        sunlight: "แดดเต็มวัน",
        description: "พืชสมุนไพรกลิ่นหอม ใช้ทำอาหารไทย ต้องการแดดจัด",
        image_url: "https://img.freepik.com/free-photo/fresh-basil-leaves_1353-259.jpg?w=200",
        water_per_day: 150,
        soil: "ดินร่วนระบายน้ำดี",
    },
    Entry {
        name: "กะเพรา",
        watering: "ปานกลาง",
        sunlight: "แดดเต็มวัน",
        description: "พืชสมุนไพรคู่ครัวไทย ปลูกง่ายทนแล้ง กลิ่นหอมแรง",
        image_url: "https://img.freepik.com/free-photo/holy-basil-leaves_1353-238.jpg?w=200",
        water_per_day: 140,
        soil: "ดินร่วนปนทราย",
    },
    Entry {
        name: "สะระแหน่",
        watering: "มาก",
        sunlight: "แสงรำไร",
        description: "พืชสมุนไพรกลิ่นหอมเย็น ใช้ทำเครื่องดื่ม ต้องการความชื้นสูง",
        image_url: "https://img.freepik.com/free-photo/fresh-mint-leaves_1353-238.jpg?w=200",
        water_per_day: 180,
        soil: "ดินร่วนชื้น",
    },
    Entry {
        name: "ผักชี",
        watering: "มาก",
        sunlight: "แสงรำไร",
        description: "พืชสมุนไพรใช้ตกแต่งอาหาร กลิ่นหอมเฉพาะตัว ปลูกในที่ร่ม",
        image_url: "https://img.freepik.com/free-photo/fresh-coriander-leaves_1353-238.jpg?w=200",
        water_per_day: 160,
        soil: "ดินร่วนชื้น",
    },
    Entry {
        name: "พริก",
        watering: "น้อย",
        sunlight: "แดดเต็มวัน",
        description: "พืชผักผลไม้รสเผ็ด ปลูกได้ตลอดปี ทนแล้งได้ดี",
        image_url: "https://img.freepik.com/free-photo/fresh-chili-peppers_1353-238.jpg?w=200",
        water_per_day: 100,
        soil: "ดินร่วนปนทราย",
    },
    Entry {
        name: "มะเขือเทศ",
        watering: "ปานกลาง",
        sunlight: "แดดเต็มวัน",
        description: "พืชผักผลไม้ ใช้ทำอาหารได้หลากหลาย ต้องการแดดมาก",
        image_url: "https://img.freepik.com/free-photo/ripe-tomatoes_1353-238.jpg?w=200",
        water_per_day: 200,
        soil: "ดินร่วนระบายน้ำดี",
    },
    Entry {
        name: "แตงกวา",
        watering: "มาก",
        sunlight: "แดดเต็มวัน",
        description: "พืชผักผลไม้รสเย็นฉ่ำน้ำ ต้องการน้ำมากและแดดเต็มที่",
        image_url: "https://img.freepik.com/free-photo/fresh-cucumbers_1353-238.jpg?w=200",
        water_per_day: 220,
        soil: "ดินร่วนชื้น",
    },
];

impl Entry {
    fn to_plant(&self, name: &str, source: LocalSource) -> LocalPlant {
        LocalPlant {
            name: name.to_string(),
            watering: self.watering,
            sunlight: self.sunlight,
            description: self.description,
            image_url: self.image_url,
            water_per_day: self.water_per_day,
            soil: self.soil,
            source,
        }
    }
}

/// カタログを検索（完全一致 → 双方向の部分一致）
pub fn search_local(plant_name: &str) -> Option<LocalPlant> {
    let query = plant_name.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    if let Some(entry) = ENTRIES.iter().find(|e| e.name.to_lowercase() == query) {
        return Some(entry.to_plant(entry.name, LocalSource::Local));
    }

    ENTRIES
        .iter()
        .find(|e| {
            let key = e.name.to_lowercase();
            key.contains(&query) || query.contains(&key)
        })
        .map(|e| e.to_plant(plant_name, LocalSource::LocalSuggested))
}

/// 候補名の一覧（定義順）
pub fn suggested_names() -> Vec<&'static str> {
    ENTRIES.iter().map(|e| e.name).collect()
}
