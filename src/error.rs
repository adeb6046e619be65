use thiserror::Error;

#[derive(Error, Debug)]
pub enum AquaSenseError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("กรุณากรอกชื่อต้นไม้")]
    EmptyName,

    #[error("ต้นไม้ชื่อนี้มีอยู่แล้ว: {0}")]
    DuplicatePlant(String),

    #[error("ไม่พบข้อมูลต้นไม้ \"{0}\"")]
    LookupExhausted(String),

    #[error("ไม่สามารถเพิ่มต้นไม้ได้ กรุณาลองใหม่ ({0})")]
    Persistence(String),

    #[error("ไม่พบต้นไม้: {0}")]
    PlantNotFound(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] aquasense_common::Error),
}

pub type Result<T> = std::result::Result<T, AquaSenseError>;
