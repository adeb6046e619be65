//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown container type: {0}. Use ground or pot")]
    UnknownContainer(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_category() {
        let error = Error::UnknownCategory("tree".to_string());
        assert_eq!(format!("{}", error), "Unknown category: tree");
    }

    #[test]
    fn test_error_display_container() {
        let error = Error::UnknownContainer("bucket".to_string());
        assert_eq!(
            format!("{}", error),
            "Unknown container type: bucket. Use ground or pot"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = Error::UnknownCategory("ต้นไม้".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("UnknownCategory"));
        assert!(debug.contains("ต้นไม้"));
    }
}
