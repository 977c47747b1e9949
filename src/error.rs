use thiserror::Error;

use crate::config::ConfigLoadError;
use crate::export::ExportError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error while loading config: {0}")]
    ConfigLoadError(#[from] ConfigLoadError),
    #[error("Error while loading points: {0:#}")]
    PointsLoadError(anyhow::Error),
    #[error("Error while exporting points: {0}")]
    ExportError(#[from] ExportError),
    #[cfg(feature = "gui")]
    #[error("Error while initializing GUI widget: {0}")]
    DruidError(#[from] druid::PlatformError),
}
