//! AquaSense Common Library
//!
//! 植物データの型と推定ルール（I/Oなし）

pub mod types;
pub mod error;
pub mod overrides;
pub mod category;
pub mod soil_light;
pub mod water;
pub mod moisture;
pub mod local_db;

pub use types::{
    Category, ContainerType, LookupResult, PlantRecord, SoilLightProfile, WaterEstimate,
    WaterLevel,
};
pub use error::{Error, Result};
pub use category::classify;
pub use soil_light::infer_soil_light;
pub use water::estimate_water;
pub use moisture::{advise, is_high_temperature, is_valid_moisture, MoistureAdvice};
pub use local_db::{search_local, suggested_names, LocalPlant, LocalSource};
