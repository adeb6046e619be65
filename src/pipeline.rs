//! 植物追加パイプライン
//!
//! ## 処理フロー
//! 1. 入力検証（空の名前は拒否）
//! 2. 同名チェック
//! 3. キャッシュ → 外部検索
//! 4. カテゴリ判定・土/日当たり推定・水量推定
//! 5. ストアへ保存（最後に1回だけ）
//! 6. 検索履歴・通知

use crate::cache::LookupCache;
use crate::error::{AquaSenseError, Result};
use crate::history::SearchHistory;
use crate::lookup::LookupChain;
use crate::notify::{Notification, Notifier};
use crate::store::{ControlCommand, PlantStore, StoredPlant};
use aquasense_common::overrides::normalize_name;
use aquasense_common::{
    classify, estimate_water, infer_soil_light, ContainerType, LookupResult, PlantRecord,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::sync::Arc;

/// 説明文が無い場合の表示
pub const NO_SUMMARY: &str = "ไม่มีข้อมูล";

/// 追加リクエスト
#[derive(Debug, Clone)]
pub struct PlantQuery {
    pub name: String,
    pub container: ContainerType,
}

impl PlantQuery {
    pub fn new(name: impl Into<String>, container: ContainerType) -> Self {
        Self {
            name: name.into(),
            container,
        }
    }
}

/// 一覧の集計
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlantSummary {
    pub total: usize,
    pub water_sum_ml: u64,
}

/// 検索結果から植物レコードを組み立てる
pub fn compose_record<R: Rng + ?Sized>(
    query_name: &str,
    info: &LookupResult,
    container: ContainerType,
    rng: &mut R,
) -> PlantRecord {
    let category = classify(&format!("{} {}", info.summary, info.name));
    let soil_light = infer_soil_light(&info.name, &info.summary, category);
    let water = estimate_water(category, container, &info.name, rng);

    let display_name = if info.name.trim().is_empty() {
        query_name.to_string()
    } else {
        info.name.clone()
    };
    let summary = if info.summary.trim().is_empty() {
        NO_SUMMARY.to_string()
    } else {
        info.summary.clone()
    };

    PlantRecord {
        display_name,
        summary,
        image: info.image.clone(),
        soil: soil_light.soil,
        light: soil_light.light,
        category,
        water_level: water.level,
        water_ml: water.ml,
        container_type: container,
        added_at: chrono::Utc::now().to_rfc3339(),
    }
}

pub struct PlantManager<S, N> {
    lookup: LookupChain,
    cache: LookupCache,
    history: SearchHistory,
    store: Arc<S>,
    notifier: N,
    /// キャッシュ・履歴の保存先（None なら保存しない）
    data_dir: Option<PathBuf>,
}

impl<S: PlantStore, N: Notifier> PlantManager<S, N> {
    pub fn new(lookup: LookupChain, store: Arc<S>, notifier: N) -> Self {
        Self {
            lookup,
            cache: LookupCache::default(),
            history: SearchHistory::default(),
            store,
            notifier,
            data_dir: None,
        }
    }

    /// キャッシュと履歴をディレクトリから読み込み、以後そこへ保存する
    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.cache = LookupCache::load(&dir);
        self.history = SearchHistory::load(&dir);
        self.data_dir = Some(dir);
        self
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// 植物を追加
    pub async fn add_plant(&mut self, query: &PlantQuery) -> Result<PlantRecord> {
        let mut rng = StdRng::from_entropy();
        self.add_plant_with_rng(query, &mut rng).await
    }

    /// 乱数源を指定して植物を追加
    pub async fn add_plant_with_rng<R: Rng + ?Sized>(
        &mut self,
        query: &PlantQuery,
        rng: &mut R,
    ) -> Result<PlantRecord> {
        let name = query.name.trim();
        if name.is_empty() {
            return Err(AquaSenseError::EmptyName);
        }

        let existing = self.store.list_plants().await?;
        let is_registered = |display_name: &str| {
            let key = normalize_name(display_name);
            existing
                .iter()
                .any(|p| normalize_name(&p.record.display_name) == key)
        };
        if is_registered(name) {
            return Err(AquaSenseError::DuplicatePlant(name.to_string()));
        }

        let info = self.resolve(name).await?;
        let record = compose_record(name, &info, query.container, rng);

        // 検索結果の表示名でも重複を確認する
        if is_registered(&record.display_name) {
            return Err(AquaSenseError::DuplicatePlant(record.display_name));
        }

        self.store
            .insert_plant(&record)
            .await
            .map_err(|e| match e {
                AquaSenseError::Persistence(_) => e,
                other => AquaSenseError::Persistence(other.to_string()),
            })?;

        tracing::info!(
            "追加: {} ({}, {}ml)",
            record.display_name,
            record.category,
            record.water_ml
        );

        self.history.push(name);
        if let Some(dir) = &self.data_dir {
            if let Err(e) = self.history.save(dir) {
                tracing::warn!("検索履歴の保存に失敗: {}", e);
            }
        }

        self.notifier
            .send(Notification::plant_added(&record.display_name))
            .await;

        Ok(record)
    }

    /// キャッシュ → 外部検索
    async fn resolve(&mut self, name: &str) -> Result<LookupResult> {
        if let Some(hit) = self.cache.get(name) {
            tracing::debug!("キャッシュヒット: {}", name);
            return Ok(hit.clone());
        }

        let info = self
            .lookup
            .lookup(name)
            .await
            .ok_or_else(|| AquaSenseError::LookupExhausted(name.to_string()))?;

        self.cache.insert(name, info.clone());
        if let Some(dir) = &self.data_dir {
            if let Err(e) = self.cache.save(dir) {
                tracing::warn!("キャッシュの保存に失敗: {}", e);
            }
        }
        Ok(info)
    }

    pub async fn list_plants(&self) -> Result<Vec<StoredPlant>> {
        self.store.list_plants().await
    }

    pub async fn remove_plant(&self, id: &str) -> Result<StoredPlant> {
        let plant = self
            .store
            .list_plants()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| AquaSenseError::PlantNotFound(id.to_string()))?;

        if !self.store.remove_plant(id).await? {
            return Err(AquaSenseError::PlantNotFound(id.to_string()));
        }
        Ok(plant)
    }

    /// 自動水やりの対象に設定
    pub async fn select_for_auto_watering(&self, plant_name: &str) -> Result<()> {
        let plant_name = plant_name.trim();
        let plant = self
            .store
            .list_plants()
            .await?
            .into_iter()
            .find(|p| p.record.display_name == plant_name)
            .ok_or_else(|| AquaSenseError::PlantNotFound(plant_name.to_string()))?;

        // AUTO_WATER は last_watered も更新する
        self.store
            .send_control(ControlCommand::AutoWater {
                plant: plant_name.to_string(),
            })
            .await?;
        self.notifier
            .send(Notification::auto_mode_changed(true, Some(plant_name)))
            .await;
        self.notifier
            .send(Notification::watering_success(plant_name, plant.record.water_ml))
            .await;
        Ok(())
    }

    /// 自動水やりを停止
    pub async fn stop_auto_watering(&self) -> Result<()> {
        self.store.send_control(ControlCommand::StopWater).await?;
        self.notifier
            .send(Notification::auto_mode_changed(false, None))
            .await;
        Ok(())
    }

    pub async fn selected_plant(&self) -> Result<Option<String>> {
        self.store.selected_plant().await
    }

    pub async fn summary(&self) -> Result<PlantSummary> {
        let plants = self.store.list_plants().await?;
        Ok(PlantSummary {
            total: plants.len(),
            water_sum_ml: plants.iter().map(|p| u64::from(p.record.water_ml)).sum(),
        })
    }

    /// 土壌水分の通知（至急の場合のみ送る。送ったら true）
    pub async fn notify_moisture(&self, plant_name: &str, soil_pct: f64) -> bool {
        match aquasense_common::advise(soil_pct) {
            aquasense_common::MoistureAdvice::Urgent => {
                self.notifier
                    .send(Notification::low_soil_moisture(plant_name, soil_pct))
                    .await
            }
            _ => false,
        }
    }

    pub async fn notify(&self, notification: Notification) -> bool {
        self.notifier.send(notification).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aquasense_common::{Category, WaterLevel};

    #[test]
    fn test_compose_record_uses_looked_up_name() {
        let info = LookupResult {
            source: "wikipedia(th)".to_string(),
            name: "กะเพรา".to_string(),
            summary: "พืชสมุนไพร".to_string(),
            image: "https://x/img.jpg".to_string(),
        };
        let mut rng = StdRng::seed_from_u64(3);
        let record = compose_record("กะเพรา", &info, ContainerType::Pot, &mut rng);

        assert_eq!(record.display_name, "กะเพรา");
        assert_eq!(record.category, Category::Vegetable);
        assert_eq!(record.soil, "ดินร่วนซุย");
        assert_eq!(record.light, "แดดเต็มวัน");
        assert_eq!(record.water_ml, 200);
        assert_eq!(record.water_level, WaterLevel::Low);
        assert_eq!(record.container_type, ContainerType::Pot);
    }

    #[test]
    fn test_compose_record_fallbacks() {
        let info = LookupResult {
            name: String::new(),
            summary: "  ".to_string(),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        let record = compose_record("Quercus", &info, ContainerType::Ground, &mut rng);

        assert_eq!(record.display_name, "Quercus");
        assert_eq!(record.summary, NO_SUMMARY);
        assert_eq!(record.category, Category::General);
        assert!(record.water_ml >= 250 && record.water_ml <= 350);
    }
}
