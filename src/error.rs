use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid TCX: {0}")]
    InvalidTcx(String),
}

/// The two per-file conditions the batch recovers from by skipping.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("No usable trackpoints in activity {0:?}")]
    EmptyActivity(String),
    #[error("Activity {0} was already processed in this run")]
    DuplicateActivity(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("Failed to load gazetteer: {0}")]
    Load(#[from] csv::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("KML generation failed: {0}")]
    Kml(#[from] quick_xml::Error),
    #[error("Generated markup is not UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
    #[error("Caption has no text blocks")]
    EmptyCaption,
}

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("PNG rendering failed: {0}")]
    RenderFailed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
