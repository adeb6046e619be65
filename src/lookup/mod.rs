//! 外部植物情報の検索
//!
//! 複数のプロバイダを順に試し、最初に結果を返したものを採用する。
//! 通信エラーや空の結果はどちらも「結果なし」として次へ進む。

mod perenual;
mod wikipedia;

pub use perenual::PerenualLookup;
pub use wikipedia::{is_thai, WikipediaLookup};

use crate::config::Config;
use crate::error::Result;
use aquasense_common::LookupResult;
use async_trait::async_trait;
use std::time::Duration;

/// 画像が無い場合の既定画像
pub const FALLBACK_IMAGE: &str = "https://img.icons8.com/color/96/000000/plant-under-sun.png";

/// 植物情報プロバイダ
#[async_trait]
pub trait PlantLookup: Send + Sync {
    /// プロバイダ名（ログ用）
    fn name(&self) -> &str;

    /// 名前で検索。失敗・該当なしは None
    async fn lookup(&self, plant_name: &str) -> Option<LookupResult>;
}

/// 順序付きのプロバイダ列
pub struct LookupChain {
    providers: Vec<Box<dyn PlantLookup>>,
}

impl LookupChain {
    pub fn new(providers: Vec<Box<dyn PlantLookup>>) -> Self {
        Self { providers }
    }

    /// 設定から Perenual → Wikipedia の順で組み立てる
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(concat!("aquasense/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::new(vec![
            Box::new(PerenualLookup::new(
                client.clone(),
                &config.perenual_base_url,
                config.perenual_api_key(),
            )),
            Box::new(WikipediaLookup::new(client, &config.wikipedia_domain)),
        ]))
    }

    /// 順に試して最初の結果を返す
    pub async fn lookup(&self, plant_name: &str) -> Option<LookupResult> {
        for provider in &self.providers {
            match provider.lookup(plant_name).await {
                Some(result) => {
                    tracing::info!("{}: \"{}\" を取得", provider.name(), result.name);
                    return Some(result);
                }
                None => {
                    tracing::debug!("{}: \"{}\" の結果なし", provider.name(), plant_name);
                }
            }
        }
        None
    }
}

/// 空でない最初の文字列を選ぶ
pub(crate) fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|s| !s.trim().is_empty())
}
