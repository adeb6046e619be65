//! 通知
//!
//! 通知先は `Notifier` として注入する。送信は投げっぱなしで、
//! 失敗しても呼び出し側の処理は止めない。

use crate::store::PlantStore;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationKind {
    Info,
    Warning,
    Critical,
    Success,
    Error,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub priority: Priority,
    pub timestamp: String,
    pub read: bool,
    pub source: String,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, priority: Priority) -> Self {
        Self {
            message: message.into(),
            kind,
            priority,
            timestamp: chrono::Utc::now().to_rfc3339(),
            read: false,
            source: "WEB_APP".to_string(),
        }
    }

    pub fn low_soil_moisture(plant_name: &str, moisture_pct: f64) -> Self {
        Self::new(
            format!(
                "ความชื้นดินต่ำ! {} มีความชื้น {}% จำเป็นต้องรดน้ำด่วน",
                plant_name, moisture_pct
            ),
            NotificationKind::Critical,
            Priority::High,
        )
    }

    pub fn high_temperature(temperature_c: f64) -> Self {
        Self::new(
            format!("อุณหภูมิสูงเกินไป! {}°C อาจทำลายพืช", temperature_c),
            NotificationKind::Warning,
            Priority::High,
        )
    }

    pub fn watering_success(plant_name: &str, water_ml: u32) -> Self {
        Self::new(
            format!("รดน้ำสำเร็จ! {} ได้รับน้ำ {}ml", plant_name, water_ml),
            NotificationKind::Success,
            Priority::Low,
        )
    }

    pub fn auto_mode_changed(enabled: bool, plant_name: Option<&str>) -> Self {
        let message = if enabled {
            match plant_name {
                Some(name) => format!("เปิดโหมดอัตโนมัติ สำหรับ {}", name),
                None => "เปิดโหมดอัตโนมัติ".to_string(),
            }
        } else {
            "ปิดโหมดอัตโนมัติ".to_string()
        };
        Self::new(message, NotificationKind::System, Priority::Medium)
    }

    pub fn system_error(error_type: &str, details: &str) -> Self {
        Self::new(
            format!("ข้อผิดพลาดระบบ: {} {}", error_type, details).trim_end().to_string(),
            NotificationKind::Error,
            Priority::High,
        )
    }

    pub fn plant_added(display_name: &str) -> Self {
        Self::new(
            format!("เพิ่ม \"{}\" สำเร็จ!", display_name),
            NotificationKind::Success,
            Priority::Low,
        )
    }
}

/// 通知先
#[async_trait]
pub trait Notifier: Send + Sync {
    /// 送信できたら true
    async fn send(&self, notification: Notification) -> bool;
}

/// tracing に出すだけの通知先
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: Notification) -> bool {
        match notification.kind {
            NotificationKind::Critical | NotificationKind::Error => {
                tracing::error!(priority = ?notification.priority, "{}", notification.message)
            }
            NotificationKind::Warning => {
                tracing::warn!(priority = ?notification.priority, "{}", notification.message)
            }
            _ => tracing::info!(priority = ?notification.priority, "{}", notification.message),
        }
        true
    }
}

/// ストアの messages に書き込む通知先（デバイス側が読む）
pub struct StoreNotifier<S> {
    store: Arc<S>,
}

impl<S> StoreNotifier<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: PlantStore> Notifier for StoreNotifier<S> {
    async fn send(&self, notification: Notification) -> bool {
        match self.store.push_message(&notification).await {
            Ok(()) => {
                tracing::debug!("通知を送信: {}", notification.message);
                true
            }
            Err(e) => {
                tracing::warn!("通知の送信に失敗: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_helper_kinds() {
        let n = Notification::low_soil_moisture("กะเพรา", 12.0);
        assert_eq!(n.kind, NotificationKind::Critical);
        assert_eq!(n.priority, Priority::High);
        assert!(n.message.contains("12%"));

        assert_eq!(Notification::high_temperature(41.0).kind, NotificationKind::Warning);
        assert_eq!(Notification::watering_success("x", 200).priority, Priority::Low);
        assert_eq!(Notification::system_error("SENSOR", "").message, "ข้อผิดพลาดระบบ: SENSOR");
    }

    #[test]
    fn test_auto_mode_message() {
        assert_eq!(
            Notification::auto_mode_changed(true, Some("มะลิ")).message,
            "เปิดโหมดอัตโนมัติ สำหรับ มะลิ"
        );
        assert_eq!(Notification::auto_mode_changed(false, Some("มะลิ")).message, "ปิดโหมดอัตโนมัติ");
        assert_eq!(Notification::auto_mode_changed(true, None).kind, NotificationKind::System);
    }

    #[test]
    fn test_serialize_uppercase() {
        let n = Notification::new("hi", NotificationKind::Info, Priority::Medium);
        let json = serde_json::to_string(&n).expect("シリアライズ失敗");
        assert!(json.contains("\"type\":\"INFO\""));
        assert!(json.contains("\"priority\":\"MEDIUM\""));
        assert!(json.contains("\"source\":\"WEB_APP\""));
        assert!(json.contains("\"read\":false"));
    }

    #[tokio::test]
    async fn test_store_notifier_pushes_message() {
        let store = Arc::new(MemoryStore::new());
        let notifier = StoreNotifier::new(store.clone());

        assert!(notifier.send(Notification::high_temperature(40.0)).await);
        assert_eq!(store.messages().len(), 1);

        store.set_fail_writes(true);
        assert!(!notifier.send(Notification::high_temperature(41.0)).await);
        assert_eq!(store.messages().len(), 1);
    }
}
