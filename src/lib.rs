pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use app::pipelines::JobPipeline;
pub use config::JobConfig;
pub use crate::core::{
    bouquet::Bouquet,
    connector::FlowerConnector,
    engine::JobEngine,
    report::ReportFormat,
    text::{remove_substring, TextProcessor},
};
pub use domain::model::{created_count, reset_created_count, FlowerKind, FlowerRecord};
pub use utils::error::{BouquetError, Result};
