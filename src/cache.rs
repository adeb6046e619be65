//! 検索結果キャッシュモジュール
//!
//! 正規化した植物名をキーにして外部検索の結果をキャッシュし、
//! 同じ名前の再検索をスキップする。期限切れはない。

use crate::error::Result;
use aquasense_common::overrides::normalize_name;
use aquasense_common::LookupResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = "plant-cache.json";

/// キャッシュキー: "plant:" + 前後空白除去・小文字化した名前
pub fn cache_key(plant_name: &str) -> String {
    format!("plant:{}", normalize_name(plant_name))
}

/// キャッシュファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupCache {
    /// バージョン（互換性チェック用）
    version: u32,
    /// キー → 検索結果のマップ
    entries: HashMap<String, LookupResult>,
}

impl LookupCache {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(dir: &Path) -> PathBuf {
        dir.join(CACHE_FILE_NAME)
    }

    /// キャッシュファイルを読み込み
    ///
    /// 読めない・壊れている・バージョン違いはすべて空キャッシュ扱い
    pub fn load(dir: &Path) -> Self {
        let cache_path = Self::cache_path(dir);
        if !cache_path.exists() {
            return Self::default();
        }

        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(e) => {
                tracing::debug!("キャッシュを開けません: {}", e);
                return Self::default();
            }
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, LookupCache>(reader) {
            Ok(cache) => {
                if cache.version != Self::CURRENT_VERSION {
                    tracing::warn!("キャッシュバージョン不一致、再生成します");
                    return Self::default();
                }
                cache
            }
            Err(e) => {
                tracing::debug!("キャッシュ破損のため無視: {}", e);
                Self::default()
            }
        }
    }

    /// キャッシュファイルを保存
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let file = File::create(Self::cache_path(dir))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// キャッシュファイルを削除（存在した場合 true）
    pub fn clear(dir: &Path) -> Result<bool> {
        let cache_path = Self::cache_path(dir);
        if cache_path.exists() {
            std::fs::remove_file(cache_path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 植物名でルックアップ
    pub fn get(&self, plant_name: &str) -> Option<&LookupResult> {
        self.entries.get(&cache_key(plant_name))
    }

    /// キャッシュに追加（同じキーは上書き）
    pub fn insert(&mut self, plant_name: &str, result: LookupResult) {
        self.entries.insert(cache_key(plant_name), result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LookupCache {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_normalizes() {
        assert_eq!(cache_key("  Basil "), "plant:basil");
        assert_eq!(cache_key("กะเพรา"), "plant:กะเพรา");
    }

    #[test]
    fn test_get_uses_normalized_key() {
        let mut cache = LookupCache::default();
        cache.insert("Basil", LookupResult {
            name: "Basil".to_string(),
            ..Default::default()
        });

        assert!(cache.get(" basil").is_some());
        assert!(cache.get("BASIL ").is_some());
        assert!(cache.get("mint").is_none());
    }
}
