//! 検索履歴（新しい順、最大5件）

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const HISTORY_FILE_NAME: &str = "search-history.json";
pub const MAX_HISTORY: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory {
    items: Vec<String>,
}

impl SearchHistory {
    pub fn history_path(dir: &Path) -> PathBuf {
        dir.join(HISTORY_FILE_NAME)
    }

    /// 読み込み（壊れていれば空）
    pub fn load(dir: &Path) -> Self {
        std::fs::read_to_string(Self::history_path(dir))
            .ok()
            .and_then(|content| serde_json::from_str::<SearchHistory>(&content).ok())
            .map(|mut history| {
                history.items.truncate(MAX_HISTORY);
                history
            })
            .unwrap_or_default()
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(Self::history_path(dir), content)?;
        Ok(())
    }

    /// 先頭に追加（重複は前へ移動）
    pub fn push(&mut self, query: &str) {
        self.items.retain(|item| item != query);
        self.items.insert(0, query.to_string());
        self.items.truncate(MAX_HISTORY);
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}
