mod tcx;

use std::path::Path;

use crate::error::ParseError;
use crate::types::activity::{FileFormat, RawActivity};

pub use tcx::TcxParser;

/// Which optional per-trackpoint fields to extract.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub include_altitude: bool,
    pub include_distance: bool,
    pub include_elapsed: bool,
}

pub trait Parser {
    fn parse(&self, bytes: &[u8], options: &ParseOptions) -> Result<RawActivity, ParseError>;
}

pub fn parse(
    bytes: &[u8],
    format: FileFormat,
    options: &ParseOptions,
) -> Result<RawActivity, ParseError> {
    match format {
        FileFormat::Tcx => TcxParser.parse(bytes, options),
    }
}

pub fn parse_file(
    path: &Path,
    format: FileFormat,
    options: &ParseOptions,
) -> Result<RawActivity, ParseError> {
    let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&bytes, format, options)
}
