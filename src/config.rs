use std::path::PathBuf;

use crate::types::tour::{ScreenOverlay, TourOptions};

#[derive(Debug, Clone)]
pub struct Config {
    pub tcx_dir: PathBuf,
    pub kml_dir: PathBuf,
    pub tour_dir: PathBuf,
    pub db_path: PathBuf,
    pub gazetteer_path: PathBuf,
    pub tour: TourOptions,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = TourOptions::default();

        let tour = TourOptions {
            tolerance: env_or("SIMPLIFY_TOLERANCE", defaults.tolerance),
            camera_speed: env_or("CAMERA_SPEED", defaults.camera_speed),
            min_duration: env_or("CAMERA_MIN_DURATION", defaults.min_duration),
            tilt: env_or("CAMERA_TILT", defaults.tilt),
            range: env_or("CAMERA_RANGE", defaults.range),
            overlay: ScreenOverlay {
                x: env_or("OVERLAY_X", defaults.overlay.x),
                y: env_or("OVERLAY_Y", defaults.overlay.y),
            },
            ..defaults
        };

        Self {
            tcx_dir: env_path("TCX_DIR", "tcx"),
            kml_dir: env_path("KML_DIR", "kml"),
            tour_dir: env_path("TOUR_DIR", "tour"),
            db_path: env_path("DB_PATH", "data.db"),
            gazetteer_path: env_path("GAZETTEER_PATH", "assets/gazetteer.csv"),
            tour,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var_os(key)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}
