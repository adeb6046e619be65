use super::{ControlCommand, PlantStore, StoreDocument, StoredPlant};
use crate::error::{AquaSenseError, Result};
use crate::notify::Notification;
use aquasense_common::PlantRecord;
use async_trait::async_trait;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

const STORE_FILE_NAME: &str = "aquasense-store.json";

/// 1つのJSONファイルに {plants, control, messages} を保存するストア
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    // 読み込み〜書き戻しを直列化する
    guard: Mutex<()>,
}

impl JsonFileStore {
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(STORE_FILE_NAME),
            guard: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 読めない・壊れているファイルは Persistence エラー
    fn read(&self) -> Result<StoreDocument> {
        if !self.path.exists() {
            return Ok(StoreDocument::default());
        }
        let file = File::open(&self.path).map_err(|e| AquaSenseError::Persistence(e.to_string()))?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            tracing::warn!("ストアファイルを読めません ({}): {}", self.path.display(), e);
            AquaSenseError::Persistence(e.to_string())
        })
    }

    fn write(&self, doc: &StoreDocument) -> Result<()> {
        // 一時ファイルに書いてから置き換える
        let tmp = self.path.with_extension("json.tmp");
        {
            let writer = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer_pretty(writer, doc)?;
        }
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    /// ドキュメントを読み込んで変更し、書き戻す
    fn modify<T>(&self, f: impl FnOnce(&mut StoreDocument) -> T) -> Result<T> {
        let _lock = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        let mut doc = self.read()?;
        let value = f(&mut doc);
        self.write(&doc)
            .map_err(|e| AquaSenseError::Persistence(e.to_string()))?;
        Ok(value)
    }

    fn snapshot(&self) -> Result<StoreDocument> {
        let _lock = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        self.read()
    }
}

#[async_trait]
impl PlantStore for JsonFileStore {
    async fn list_plants(&self) -> Result<Vec<StoredPlant>> {
        Ok(self.snapshot()?.list_plants())
    }

    async fn insert_plant(&self, record: &PlantRecord) -> Result<String> {
        self.modify(|doc| doc.insert_plant(record))
    }

    async fn remove_plant(&self, id: &str) -> Result<bool> {
        self.modify(|doc| doc.plants.remove(id).is_some())
    }

    async fn selected_plant(&self) -> Result<Option<String>> {
        Ok(self.snapshot()?.control.selected_plant)
    }

    async fn send_control(&self, command: ControlCommand) -> Result<()> {
        let now = chrono::Utc::now().to_rfc3339();
        self.modify(|doc| doc.control.apply(&command, &now))
    }

    async fn push_message(&self, notification: &Notification) -> Result<()> {
        self.modify(|doc| doc.push_message(notification))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::open(dir.path()).expect("オープン失敗");
        assert!(store.list_plants().await.unwrap().is_empty());
        assert_eq!(store.selected_plant().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupted_file_is_persistence_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let store = JsonFileStore::open(dir.path()).expect("オープン失敗");
        std::fs::write(store.path(), "{ invalid json }").unwrap();

        let err = store.list_plants().await.unwrap_err();
        assert!(matches!(err, AquaSenseError::Persistence(_)));
        assert!(err.to_string().contains("ไม่สามารถเพิ่มต้นไม้ได้"));

        // 壊れたファイルは上書きしない
        let err = store.push_message(&Notification::high_temperature(40.0)).await.unwrap_err();
        assert!(matches!(err, AquaSenseError::Persistence(_)));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{ invalid json }");
    }
}
