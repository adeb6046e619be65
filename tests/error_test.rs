//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use aquasense::error::AquaSenseError;
use aquasense_common::{Category, ContainerType};

/// AquaSenseErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        AquaSenseError::Config("テスト設定エラー".to_string()),
        AquaSenseError::EmptyName,
        AquaSenseError::DuplicatePlant("มะลิ".to_string()),
        AquaSenseError::LookupExhausted("XyzUnknownPlant123".to_string()),
        AquaSenseError::Persistence("write rejected".to_string()),
        AquaSenseError::PlantNotFound("p000009".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 利用者向けメッセージ
#[test]
fn test_user_facing_messages() {
    assert_eq!(AquaSenseError::EmptyName.to_string(), "กรุณากรอกชื่อต้นไม้");

    let display = AquaSenseError::LookupExhausted("XyzUnknownPlant123".to_string()).to_string();
    assert!(display.contains("ไม่พบข้อมูลต้นไม้"));
    assert!(display.contains("XyzUnknownPlant123"));
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = AquaSenseError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: AquaSenseError = io_err.into();

    assert!(matches!(err, AquaSenseError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: AquaSenseError = json_err.into();

    assert!(matches!(err, AquaSenseError::JsonParse(_)));
}

/// 不明なカテゴリ指定は common のエラーとして透過する
#[test]
fn test_common_error_conversion() {
    let common_err = "tree".parse::<Category>().unwrap_err();
    let err: AquaSenseError = common_err.into();

    assert!(matches!(err, AquaSenseError::Common(_)));
    assert!(format!("{}", err).contains("tree"));
}

/// 植え付け種別のパースエラー
#[test]
fn test_unknown_container() {
    assert!("balcony".parse::<ContainerType>().is_err());
    assert_eq!("pot".parse::<ContainerType>().unwrap(), ContainerType::Pot);
}
