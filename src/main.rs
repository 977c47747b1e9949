use std::env;

use druid::AppLauncher;
use druid::WindowDesc;
use icorr::config::Config;
use icorr::config::DEFAULT_CONFIG_PATH;
use icorr::error::AppError;
use icorr::export::load_points;
use icorr::gui::build_toplevel_widget;
use icorr::gui::AppData;
use icorr::history::PointHistory;

/// Usage: `icorr [POINTS_FILE]`, where the file holds points saved earlier.
fn main() -> Result<(), AppError> {
    env_logger::init();

    let config = Config::load_or_default(DEFAULT_CONFIG_PATH)?;
    let history = match env::args_os().nth(1) {
        Some(path) => {
            PointHistory::from_points(load_points(path).map_err(AppError::PointsLoadError)?)
        }
        None => PointHistory::new(),
    };

    let window = WindowDesc::new(build_toplevel_widget(&config))
        .title("Interactive correlation")
        .window_size((1000.0, 720.0));
    AppLauncher::with_window(window).launch(AppData::new(history, &config))?;

    Ok(())
}
