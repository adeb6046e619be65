//! AquaSense
//!
//! 植物名から外部情報を検索し、カテゴリ・土・日当たり・水やり量を推定して保存する。

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod lookup;
pub mod notify;
pub mod pipeline;
pub mod store;

pub use error::{AquaSenseError, Result};
pub use pipeline::{PlantManager, PlantQuery};
