use crate::error::{AquaSenseError, Result};
use aquasense_common::ContainerType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_PERENUAL_BASE_URL: &str = "https://perenual.com/api";
pub const DEFAULT_WIKIPEDIA_DOMAIN: &str = "wikipedia.org";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub perenual_api_key: Option<String>,
    pub perenual_base_url: String,
    /// "{lang}.{domain}" で接続する
    pub wikipedia_domain: String,
    pub request_timeout_seconds: u64,
    /// キャッシュ・履歴・ストアの保存先（未設定なら ~/.local/share/aquasense）
    pub data_dir: Option<PathBuf>,
    pub default_container: ContainerType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            perenual_api_key: None,
            perenual_base_url: DEFAULT_PERENUAL_BASE_URL.into(),
            wikipedia_domain: DEFAULT_WIKIPEDIA_DOMAIN.into(),
            request_timeout_seconds: 10,
            data_dir: None,
            default_container: ContainerType::Ground,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AquaSenseError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("aquasense").join("config.json"))
    }

    /// データ保存先ディレクトリ
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_local_dir()
            .ok_or_else(|| AquaSenseError::Config("データディレクトリが見つかりません".into()))?;
        Ok(base.join("aquasense"))
    }

    /// Perenual APIキー（環境変数を優先）
    pub fn perenual_api_key(&self) -> Option<String> {
        match std::env::var("PERENUAL_API_KEY") {
            Ok(key) if !key.trim().is_empty() => Some(key),
            _ => self.perenual_api_key.clone().filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.perenual_api_key = Some(key);
        self.save()
    }
}
