//! Wikipedia 検索 + ページ要約
//!
//! タイ文字を含む名前は th、それ以外は en のWikipediaを使う。

use super::{first_non_empty, PlantLookup, FALLBACK_IMAGE};
use aquasense_common::LookupResult;
use async_trait::async_trait;
use reqwest::Url;
use serde::Deserialize;

/// タイ文字 (U+0E00–U+0E7F) を含むか
pub fn is_thai(text: &str) -> bool {
    text.chars().any(|c| ('\u{0E00}'..='\u{0E7F}').contains(&c))
}

fn language_for(plant_name: &str) -> &'static str {
    if is_thai(plant_name) {
        "th"
    } else {
        "en"
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    title: Option<String>,
    extract: Option<String>,
    thumbnail: Option<ImageRef>,
    originalimage: Option<ImageRef>,
}

#[derive(Debug, Deserialize)]
struct ImageRef {
    source: Option<String>,
}

pub struct WikipediaLookup {
    client: reqwest::Client,
    domain: String,
}

impl WikipediaLookup {
    pub fn new(client: reqwest::Client, domain: &str) -> Self {
        Self {
            client,
            domain: domain.trim_matches('/').to_string(),
        }
    }

    fn search_url(&self, lang: &str) -> String {
        format!("https://{}.{}/w/api.php", lang, self.domain)
    }

    fn summary_url(&self, lang: &str, title: &str) -> Option<Url> {
        let mut url = Url::parse(&format!("https://{}.{}/api/rest_v1/page/summary", lang, self.domain)).ok()?;
        url.path_segments_mut().ok()?.push(title);
        Some(url)
    }

    async fn search_title(&self, lang: &str, plant_name: &str) -> reqwest::Result<Option<String>> {
        let response = self
            .client
            .get(self.search_url(lang))
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("list", "search"),
                ("srsearch", plant_name.trim()),
                ("srlimit", "1"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;

        Ok(response
            .query
            .and_then(|q| q.search.into_iter().next())
            .map(|hit| hit.title))
    }

    async fn fetch_summary(&self, url: Url) -> reqwest::Result<PageSummary> {
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<PageSummary>()
            .await
    }
}

#[async_trait]
impl PlantLookup for WikipediaLookup {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn lookup(&self, plant_name: &str) -> Option<LookupResult> {
        let lang = language_for(plant_name);

        let title = match self.search_title(lang, plant_name).await {
            Ok(Some(title)) => title,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!("wikipedia検索失敗: {}", e);
                return None;
            }
        };

        let url = self.summary_url(lang, &title)?;
        match self.fetch_summary(url).await {
            Ok(summary) => Some(summary_to_result(summary, lang)),
            Err(e) => {
                tracing::debug!("wikipedia要約取得失敗 ({}): {}", title, e);
                None
            }
        }
    }
}

fn summary_to_result(summary: PageSummary, lang: &str) -> LookupResult {
    let thumbnail = summary.thumbnail.as_ref().and_then(|i| i.source.as_deref());
    let original = summary.originalimage.as_ref().and_then(|i| i.source.as_deref());

    LookupResult {
        source: format!("wikipedia({})", lang),
        name: summary.title.clone().unwrap_or_default(),
        summary: summary.extract.clone().unwrap_or_default(),
        image: first_non_empty(&[thumbnail, original])
            .unwrap_or(FALLBACK_IMAGE)
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_thai() {
        assert!(is_thai("กะเพรา"));
        assert!(is_thai("holy กะเพรา"));
        assert!(!is_thai("Holy basil"));
        assert!(!is_thai(""));
    }

    #[test]
    fn test_language_for() {
        assert_eq!(language_for("มะม่วง"), "th");
        assert_eq!(language_for("Mango"), "en");
    }

    #[test]
    fn test_summary_url_encodes_title() {
        let lookup = WikipediaLookup::new(reqwest::Client::new(), "wikipedia.org");
        let url = lookup.summary_url("en", "Ocimum tenuiflorum").expect("URL生成失敗");
        assert_eq!(
            url.as_str(),
            "https://en.wikipedia.org/api/rest_v1/page/summary/Ocimum%20tenuiflorum"
        );

        let url = lookup.summary_url("en", "AC/DC").expect("URL生成失敗");
        assert!(url.as_str().ends_with("/summary/AC%2FDC"));
    }

    #[test]
    fn test_search_response_without_hits() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"batchcomplete": "", "query": {"search": []}}"#)
                .expect("デシリアライズ失敗");
        assert!(response.query.unwrap().search.is_empty());

        let response: SearchResponse = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert!(response.query.is_none());
    }

    #[test]
    fn test_summary_to_result_prefers_thumbnail() {
        let summary: PageSummary = serde_json::from_str(
            r#"{
                "title": "Mango",
                "extract": "A mango is an edible stone fruit.",
                "thumbnail": {"source": "https://x/thumb.jpg"},
                "originalimage": {"source": "https://x/original.jpg"}
            }"#,
        )
        .expect("デシリアライズ失敗");

        let result = summary_to_result(summary, "en");
        assert_eq!(result.source, "wikipedia(en)");
        assert_eq!(result.name, "Mango");
        assert_eq!(result.image, "https://x/thumb.jpg");
    }

    #[test]
    fn test_summary_to_result_fallback_image() {
        let summary: PageSummary =
            serde_json::from_str(r#"{"title": "มะม่วง", "extract": "ไม้ผล"}"#).expect("デシリアライズ失敗");
        let result = summary_to_result(summary, "th");
        assert_eq!(result.image, FALLBACK_IMAGE);

        let summary: PageSummary = serde_json::from_str(
            r#"{"title": "X", "originalimage": {"source": "https://x/original.jpg"}}"#,
        )
        .expect("デシリアライズ失敗");
        assert_eq!(summary_to_result(summary, "en").image, "https://x/original.jpg");
    }
}
