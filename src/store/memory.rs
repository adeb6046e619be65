use super::{ControlCommand, PlantStore, StoreDocument, StoredPlant};
use crate::error::{AquaSenseError, Result};
use crate::notify::Notification;
use aquasense_common::PlantRecord;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// プロセス内だけのストア
#[derive(Debug, Default)]
pub struct MemoryStore {
    doc: Mutex<StoreDocument>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// true にすると書き込みをすべて失敗させる
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn messages(&self) -> Vec<Notification> {
        self.lock().messages.clone()
    }

    pub fn last_command(&self) -> Option<String> {
        self.lock().control.command.clone()
    }

    fn lock(&self) -> MutexGuard<'_, StoreDocument> {
        // 書き込み途中で panic しても中身は整合している
        self.doc.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AquaSenseError::Persistence("write rejected".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PlantStore for MemoryStore {
    async fn list_plants(&self) -> Result<Vec<StoredPlant>> {
        Ok(self.lock().list_plants())
    }

    async fn insert_plant(&self, record: &PlantRecord) -> Result<String> {
        self.check_writable()?;
        Ok(self.lock().insert_plant(record))
    }

    async fn remove_plant(&self, id: &str) -> Result<bool> {
        self.check_writable()?;
        Ok(self.lock().plants.remove(id).is_some())
    }

    async fn selected_plant(&self) -> Result<Option<String>> {
        Ok(self.lock().control.selected_plant.clone())
    }

    async fn send_control(&self, command: ControlCommand) -> Result<()> {
        self.check_writable()?;
        let now = chrono::Utc::now().to_rfc3339();
        self.lock().control.apply(&command, &now);
        Ok(())
    }

    async fn push_message(&self, notification: &Notification) -> Result<()> {
        self.check_writable()?;
        self.lock().push_message(notification);
        Ok(())
    }
}
