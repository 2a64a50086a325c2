use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{AppError, ParseError, ProcessError};
use crate::pipeline::caption::{caption_blocks, CaptionRenderer};
use crate::pipeline::filter::filter_trackpoints;
use crate::pipeline::guard::{DuplicateGuard, Registration};
use crate::pipeline::locate::Locator;
use crate::pipeline::normalize::normalize;
use crate::pipeline::parse::{self, ParseOptions};
use crate::pipeline::plan::plan_camera;
use crate::pipeline::serialize::{tour_kml, track_kml};
use crate::pipeline::simplify::{path_from_trackpoints, simplify_path};
use crate::storage::{ActivitySink, Storage};
use crate::types::activity::FileFormat;
use crate::types::tour::Tour;

const PARSE_OPTIONS: ParseOptions = ParseOptions {
    include_altitude: true,
    include_distance: true,
    include_elapsed: false,
};

/// Artifacts written for one processed activity.
#[derive(Debug, Clone)]
pub struct ActivityOutput {
    pub id: String,
    pub source: PathBuf,
    pub track_file: PathBuf,
    pub tour_file: PathBuf,
    pub caption_file: PathBuf,
    pub trackpoints: usize,
    pub simplified_points: usize,
    pub camera_moves: usize,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: usize,
    pub skipped_empty: usize,
    pub skipped_duplicate: usize,
    pub outputs: Vec<ActivityOutput>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.outputs.len()
    }
}

/// Collaborators shared by every file in a run.
pub struct Batch<'a> {
    pub config: &'a Config,
    pub locator: &'a dyn Locator,
    pub captions: &'a dyn CaptionRenderer,
}

impl Batch<'_> {
    /// Processes every activity file in `config.tcx_dir` inside one storage
    /// transaction. Empty and duplicate activities are skipped; any other
    /// error aborts the run and nothing is committed.
    pub fn run(&self, storage: &mut Storage) -> Result<BatchReport, AppError> {
        for dir in [&self.config.kml_dir, &self.config.tour_dir] {
            std::fs::create_dir_all(dir).map_err(|source| AppError::Write {
                path: dir.clone(),
                source,
            })?;
        }

        let files = list_activity_files(&self.config.tcx_dir)?;
        let mut report = BatchReport {
            files: files.len(),
            ..BatchReport::default()
        };
        let mut guard = DuplicateGuard::new();

        let txn = storage.begin()?;
        for file in &files {
            match self.process_file(file, &mut guard, &txn) {
                Ok(output) => report.outputs.push(output),
                Err(AppError::Process(ProcessError::EmptyActivity(_))) => {
                    tracing::warn!("Skipping empty file: {}", file.display());
                    report.skipped_empty += 1;
                }
                Err(AppError::Process(ProcessError::DuplicateActivity(id))) => {
                    tracing::warn!("Skipping duplicate id {} in {}", id, file.display());
                    report.skipped_duplicate += 1;
                }
                Err(e) => {
                    tracing::error!("Aborting batch at {}: {}", file.display(), e);
                    return Err(e);
                }
            }
        }
        txn.commit()?;

        tracing::info!(
            "Batch complete: {} processed, {} empty, {} duplicate",
            report.processed(),
            report.skipped_empty,
            report.skipped_duplicate
        );
        Ok(report)
    }

    fn process_file(
        &self,
        path: &Path,
        guard: &mut DuplicateGuard,
        sink: &dyn ActivitySink,
    ) -> Result<ActivityOutput, AppError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let raw = parse::parse_file(path, FileFormat::Tcx, &PARSE_OPTIONS)?;
        if raw.trackpoints.is_empty() {
            return Err(ProcessError::EmptyActivity(file_name).into());
        }

        let activity = normalize(&raw, self.locator)?;
        if guard.check_and_register(&activity.id) == Registration::AlreadySeen {
            return Err(ProcessError::DuplicateActivity(activity.id).into());
        }

        let points = filter_trackpoints(&activity.trackpoints);
        if points.is_empty() {
            return Err(ProcessError::EmptyActivity(file_name).into());
        }

        tracing::info!(
            "activity: {} {} ({} trackpoints, {} usable)",
            activity.id,
            file_name,
            activity.trackpoints.len(),
            points.len()
        );

        let kml_name = format!("{}.kml", activity.id);
        let png_name = Path::new(&kml_name)
            .with_extension("png")
            .to_string_lossy()
            .into_owned();

        sink.insert_activity(&activity, &kml_name, &file_name)?;
        for point in &points {
            sink.insert_trackpoint(&activity.id, point)?;
        }

        let track_file = self.config.kml_dir.join(&kml_name);
        tracing::info!("  generating kml: {}", track_file.display());
        write_file(&track_file, track_kml(&points)?.as_bytes())?;

        let options = &self.config.tour;
        let full_path = path_from_trackpoints(&points);
        let simplified = simplify_path(&full_path, options.tolerance);
        tracing::debug!(
            "simplified {} points to {} (tolerance {})",
            full_path.len(),
            simplified.len(),
            options.tolerance
        );
        let moves = plan_camera(&simplified, options);

        let tour = Tour {
            name: format!("Tour {}", activity.locality),
            moves,
            path: full_path,
            caption_href: Some(png_name.clone()),
            overlay: options.overlay,
            line_color: options.line_color.clone(),
            line_width: options.line_width,
        };
        let tour_file = self.config.tour_dir.join(&kml_name);
        tracing::info!("  generating tour: {}", tour_file.display());
        write_file(&tour_file, tour_kml(&tour)?.as_bytes())?;

        let caption_file = self.config.tour_dir.join(&png_name);
        tracing::info!("  generating png: {}", caption_file.display());
        let png = self.captions.render(&caption_blocks(&activity))?;
        write_file(&caption_file, &png)?;

        Ok(ActivityOutput {
            id: activity.id,
            source: path.to_path_buf(),
            track_file,
            tour_file,
            caption_file,
            trackpoints: points.len(),
            simplified_points: simplified.len(),
            camera_moves: tour.moves.len(),
        })
    }
}

/// Activity files in `dir`, sorted by file name.
pub fn list_activity_files(dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let io_err = |source| ParseError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let is_tcx = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(FileFormat::from_filename)
            .is_some();
        if path.is_file() && is_tcx {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<(), AppError> {
    std::fs::write(path, contents).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}
