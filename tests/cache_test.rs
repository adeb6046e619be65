//! キャッシュ機能テスト
//!
//! 検索結果キャッシュと検索履歴の保存・読み込みを検証

use aquasense::cache::LookupCache;
use aquasense::history::{SearchHistory, MAX_HISTORY};
use aquasense_common::LookupResult;
use tempfile::tempdir;

fn result(name: &str, summary: &str) -> LookupResult {
    LookupResult {
        source: "wikipedia(th)".to_string(),
        name: name.to_string(),
        summary: summary.to_string(),
        image: String::new(),
    }
}

/// 空のキャッシュファイル
#[test]
fn test_cache_file_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let cache = LookupCache::load(dir.path());

    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
}

/// キャッシュの保存と読み込み
#[test]
fn test_cache_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");

    let mut cache = LookupCache::load(dir.path());
    cache.insert("กะเพรา", result("กะเพรา", "พืชสมุนไพร"));
    cache.save(dir.path()).expect("キャッシュ保存失敗");

    // 再読み込み
    let loaded = LookupCache::load(dir.path());
    assert_eq!(loaded.len(), 1);

    let cached = loaded.get("กะเพรา").expect("キャッシュが見つからない");
    assert_eq!(cached.name, "กะเพรา");
    assert_eq!(cached.summary, "พืชสมุนไพร");
}

/// キーは前後空白・大文字小文字を無視する
#[test]
fn test_cache_hit_normalized() {
    let mut cache = LookupCache::default();
    cache.insert("Monstera", result("Monstera deliciosa", ""));

    assert!(cache.get("monstera").is_some());
    assert!(cache.get("  MONSTERA  ").is_some());
    assert!(cache.get("Monster").is_none());
}

/// キャッシュの上書き
#[test]
fn test_cache_overwrite() {
    let mut cache = LookupCache::default();

    cache.insert("mint", result("Mint", "最初"));
    cache.insert("MINT", result("Mint", "更新後"));

    let cached = cache.get("mint").expect("キャッシュが見つからない");
    assert_eq!(cached.summary, "更新後");
    assert_eq!(cache.len(), 1); // エントリ数は変わらない
}

/// キャッシュファイルが破損している場合
#[test]
fn test_cache_corrupted_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(LookupCache::cache_path(dir.path()), "{ invalid json }").unwrap();

    // 破損したキャッシュは空として扱われる
    let cache = LookupCache::load(dir.path());
    assert!(cache.is_empty());
}

/// バージョン違いのキャッシュは捨てる
#[test]
fn test_cache_version_mismatch() {
    let dir = tempdir().expect("Failed to create temp dir");
    let content = r#"{"version": 99, "entries": {"plant:x": {"source": "s", "name": "x", "summary": "", "image": ""}}}"#;
    std::fs::write(LookupCache::cache_path(dir.path()), content).unwrap();

    let cache = LookupCache::load(dir.path());
    assert!(cache.is_empty());
}

/// キャッシュの削除
#[test]
fn test_cache_clear() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut cache = LookupCache::default();
    cache.insert("x", result("x", ""));
    cache.save(dir.path()).expect("保存失敗");

    assert!(LookupCache::clear(dir.path()).expect("削除失敗"));
    assert!(!LookupCache::cache_path(dir.path()).exists());
    assert!(!LookupCache::clear(dir.path()).expect("削除失敗"));
}

/// 検索履歴の保存と読み込み
#[test]
fn test_history_save_and_load() {
    let dir = tempdir().expect("Failed to create temp dir");

    let mut history = SearchHistory::load(dir.path());
    for name in ["a", "b", "c", "d", "e", "f"] {
        history.push(name);
    }
    history.save(dir.path()).expect("履歴保存失敗");

    let loaded = SearchHistory::load(dir.path());
    assert_eq!(loaded.items().len(), MAX_HISTORY);
    assert_eq!(loaded.items()[0], "f");
    assert_eq!(loaded.items()[4], "b");
}

/// 壊れた履歴ファイルは空として扱う
#[test]
fn test_history_corrupted_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(SearchHistory::history_path(dir.path()), "not json").unwrap();

    assert!(SearchHistory::load(dir.path()).items().is_empty());
}
