//! 植物レコードと制御状態の保存先
//!
//! 本体はリアルタイムDB側にある想定で、ここではその窓口だけを定義する。
//! ローカル用に JSON ファイル実装、テスト用にメモリ実装を持つ。

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::notify::Notification;
use aquasense_common::PlantRecord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// ID付きの保存済みレコード
#[derive(Debug, Clone, PartialEq)]
pub struct StoredPlant {
    pub id: String,
    pub record: PlantRecord,
}

/// 自動水やりの制御コマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlCommand {
    AutoWater { plant: String },
    StopWater,
}

impl ControlCommand {
    pub fn code(&self) -> &'static str {
        match self {
            ControlCommand::AutoWater { .. } => "AUTO_WATER",
            ControlCommand::StopWater => "STOP_WATER",
        }
    }
}

/// control ノードの内容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ControlState {
    pub selected_plant: Option<String>,
    pub command: Option<String>,
    #[serde(rename = "last_watered")]
    pub last_watered: Option<String>,
}

impl ControlState {
    /// コマンドを反映
    pub fn apply(&mut self, command: &ControlCommand, now: &str) {
        match command {
            ControlCommand::AutoWater { plant } => {
                self.selected_plant = Some(plant.clone());
                self.last_watered = Some(now.to_string());
            }
            ControlCommand::StopWater => {
                self.selected_plant = None;
            }
        }
        self.command = Some(command.code().to_string());
    }
}

/// 保持する通知の上限（古いものから捨てる）
pub const MAX_MESSAGES: usize = 100;

/// ストア全体のドキュメント
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct StoreDocument {
    pub plants: BTreeMap<String, PlantRecord>,
    pub control: ControlState,
    pub messages: Vec<Notification>,
    pub next_id: u64,
}

impl StoreDocument {
    pub fn insert_plant(&mut self, record: &PlantRecord) -> String {
        self.next_id += 1;
        let id = format!("p{:06}", self.next_id);
        self.plants.insert(id.clone(), record.clone());
        id
    }

    pub fn push_message(&mut self, notification: &Notification) {
        self.messages.push(notification.clone());
        if self.messages.len() > MAX_MESSAGES {
            let overflow = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..overflow);
        }
    }

    pub fn list_plants(&self) -> Vec<StoredPlant> {
        self.plants
            .iter()
            .map(|(id, record)| StoredPlant {
                id: id.clone(),
                record: record.clone(),
            })
            .collect()
    }
}

#[async_trait]
pub trait PlantStore: Send + Sync {
    async fn list_plants(&self) -> Result<Vec<StoredPlant>>;

    /// 追加して新しいIDを返す
    async fn insert_plant(&self, record: &PlantRecord) -> Result<String>;

    /// 削除（存在した場合 true）
    async fn remove_plant(&self, id: &str) -> Result<bool>;

    /// 自動水やり対象の植物名
    async fn selected_plant(&self) -> Result<Option<String>>;

    async fn send_control(&self, command: ControlCommand) -> Result<()>;

    async fn push_message(&self, notification: &Notification) -> Result<()>;
}
