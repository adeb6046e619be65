//! Perenual species-list API

use super::{first_non_empty, PlantLookup, FALLBACK_IMAGE};
use aquasense_common::LookupResult;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SpeciesList {
    #[serde(default)]
    data: Vec<Species>,
}

#[derive(Debug, Deserialize)]
struct Species {
    common_name: Option<String>,
    description: Option<String>,
    brief_description: Option<String>,
    default_image: Option<DefaultImage>,
}

#[derive(Debug, Deserialize)]
struct DefaultImage {
    regular_url: Option<String>,
    medium_url: Option<String>,
}

pub struct PerenualLookup {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl PerenualLookup {
    pub fn new(client: reqwest::Client, base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn fetch(&self, api_key: &str, plant_name: &str) -> reqwest::Result<SpeciesList> {
        self.client
            .get(format!("{}/species-list", self.base_url))
            .query(&[("key", api_key), ("q", plant_name)])
            .send()
            .await?
            .error_for_status()?
            .json::<SpeciesList>()
            .await
    }
}

#[async_trait]
impl PlantLookup for PerenualLookup {
    fn name(&self) -> &str {
        "perenual"
    }

    async fn lookup(&self, plant_name: &str) -> Option<LookupResult> {
        // APIキー未設定なら問い合わせない
        let api_key = self.api_key.as_deref()?;

        let list = match self.fetch(api_key, plant_name).await {
            Ok(list) => list,
            Err(e) => {
                tracing::debug!("perenual検索失敗: {}", e);
                return None;
            }
        };

        list.data
            .into_iter()
            .next()
            .map(|species| species_to_result(species, plant_name))
    }
}

fn species_to_result(species: Species, plant_name: &str) -> LookupResult {
    let (regular, medium) = species
        .default_image
        .as_ref()
        .map(|img| (img.regular_url.as_deref(), img.medium_url.as_deref()))
        .unwrap_or((None, None));

    LookupResult {
        source: "perenual".to_string(),
        name: first_non_empty(&[species.common_name.as_deref()])
            .unwrap_or(plant_name)
            .to_string(),
        summary: first_non_empty(&[
            species.description.as_deref(),
            species.brief_description.as_deref(),
        ])
        .unwrap_or_default()
        .to_string(),
        image: first_non_empty(&[regular, medium])
            .unwrap_or(FALLBACK_IMAGE)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_to_result_full() {
        let json = r#"{"data": [{
            "common_name": "Holy basil",
            "description": "An aromatic herb.",
            "default_image": {"regular_url": "https://x/regular.jpg", "medium_url": "https://x/medium.jpg"}
        }]}"#;
        let list: SpeciesList = serde_json::from_str(json).expect("デシリアライズ失敗");
        let species = list.data.into_iter().next().expect("空");
        let result = species_to_result(species, "basil");

        assert_eq!(result.source, "perenual");
        assert_eq!(result.name, "Holy basil");
        assert_eq!(result.summary, "An aromatic herb.");
        assert_eq!(result.image, "https://x/regular.jpg");
    }

    #[test]
    fn test_species_to_result_fallbacks() {
        let json = r#"{"data": [{
            "common_name": null,
            "brief_description": "Short text",
            "default_image": {"regular_url": null, "medium_url": "https://x/medium.jpg"}
        }]}"#;
        let list: SpeciesList = serde_json::from_str(json).expect("デシリアライズ失敗");
        let species = list.data.into_iter().next().expect("空");
        let result = species_to_result(species, "mint");

        assert_eq!(result.name, "mint");
        assert_eq!(result.summary, "Short text");
        assert_eq!(result.image, "https://x/medium.jpg");
    }

    #[test]
    fn test_species_without_image() {
        let json = r#"{"data": [{"common_name": "Rose"}]}"#;
        let list: SpeciesList = serde_json::from_str(json).expect("デシリアライズ失敗");
        let species = list.data.into_iter().next().expect("空");
        let result = species_to_result(species, "rose");

        assert_eq!(result.summary, "");
        assert_eq!(result.image, FALLBACK_IMAGE);
    }

    #[test]
    fn test_empty_data() {
        let list: SpeciesList = serde_json::from_str(r#"{"total": 0}"#).expect("デシリアライズ失敗");
        assert!(list.data.is_empty());
    }

    #[tokio::test]
    async fn test_no_api_key_skips_request() {
        // 到達不能なURLでも、キーが無ければ通信せず None
        let lookup = PerenualLookup::new(reqwest::Client::new(), "http://127.0.0.1:9", None);
        assert!(lookup.lookup("basil").await.is_none());
    }
}
