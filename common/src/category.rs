//! 植物カテゴリ判定
//!
//! 名前と説明文を連結したテキストをキーワードで判定する。
//! 判定順: vegetable > fruit > flower > grass > ornamental > herb > general

use crate::types::Category;
use regex::Regex;

lazy_static::lazy_static! {
    /// (カテゴリ, キーワード) の判定順リスト
    static ref CATEGORY_RULES: Vec<(Category, Regex)> = vec![
        (Category::Vegetable, Regex::new(r"ผัก|vegetable|herb|basil|mint|คะน้า|กะเพรา|โหระพา|สะระแหน่|ผักชี").unwrap()),
        (Category::Fruit, Regex::new(r"ไม้ผล|fruit|มะม่วง|มะละกอ|ทุเรียน|ส้ม|เงาะ|ลำไย|มังคุด").unwrap()),
        (Category::Flower, Regex::new(r"ดอก|flower|ornamental|กุหลาบ|กล้วยไม้|เบญจมาศ|มะลิ|ดาวเรือง").unwrap()),
        (Category::Grass, Regex::new(r"หญ้า|grass").unwrap()),
        (Category::Ornamental, Regex::new(r"ไม้ประดับ|ornamental|ficus|ไม้ใบ").unwrap()),
        (Category::Herb, Regex::new(r"สมุนไพร|herb|medicinal").unwrap()),
    ];
}

/// テキストからカテゴリを判定（該当なしは General）
pub fn classify(text: &str) -> Category {
    let text = text.to_lowercase();

    CATEGORY_RULES
        .iter()
        .find(|(_, re)| re.is_match(&text))
        .map(|(category, _)| *category)
        .unwrap_or(Category::General)
}
