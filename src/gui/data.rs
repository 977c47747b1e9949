use std::path::PathBuf;

use chrono::Local;
use druid::Data;
use druid::Lens;
use log::error;

use crate::config::Config;
use crate::export::points_text;
use crate::export::save_points;
use crate::export::ExportError;
use crate::history::PointHistory;
use crate::point::Point;

#[derive(Clone, Debug, Data, Lens)]
pub struct AppData {
    #[data(same_fn = "PartialEq::eq")]
    pub history: PointHistory,
    /// Data point under the pointer, if it is over the canvas.
    #[data(same_fn = "PartialEq::eq")]
    pub cursor: Option<Point>,
    #[data(same_fn = "PartialEq::eq")]
    pub export_dir: PathBuf,
    /// Outcome of the last export.
    pub status: String,
}

impl AppData {
    pub fn new(history: PointHistory, config: &Config) -> Self {
        AppData {
            history,
            cursor: None,
            export_dir: config.export_dir.clone(),
            status: String::new(),
        }
    }

    pub fn points_text(&self) -> String {
        points_text(self.history.active_points())
    }

    pub fn save_points(&mut self) {
        let points = self.history.active_points();
        let regression = self.history.regression_snapshot();
        let result = save_points(
            &self.export_dir,
            points,
            &regression,
            Local::now().naive_local(),
        );
        self.report_export(result);
    }

    pub fn report_export(&mut self, result: Result<PathBuf, ExportError>) {
        self.status = match result {
            Ok(path) => format!("Saved {}", path.display()),
            Err(e) => {
                error!("Failed to export: {}", e);
                format!("Save failed: {}", e)
            }
        };
    }
}
