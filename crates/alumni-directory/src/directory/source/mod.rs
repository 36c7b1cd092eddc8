//! Where roster rows come from. The directory never pushes filtering down to
//! the source; it always asks for every row.

mod parser;

use super::record::PersonRecord;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Supplies the complete, unfiltered roster.
pub trait RecordSource: Send + Sync {
    fn fetch_all(&self) -> Result<Vec<PersonRecord>, RecordSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecordSourceError {
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid roster JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialization of a roster export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Csv,
    Json,
}

impl RosterFormat {
    /// `.json` files are read as JSON arrays; everything else as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }

    pub fn parse<R: Read>(self, reader: R) -> Result<Vec<PersonRecord>, RecordSourceError> {
        match self {
            Self::Csv => parser::parse_csv(reader),
            Self::Json => parser::parse_json(reader),
        }
    }
}

/// Roster export on disk, re-read on every fetch.
#[derive(Debug, Clone)]
pub struct RosterFile {
    path: PathBuf,
    format: RosterFormat,
}

impl RosterFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let format = RosterFormat::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> RosterFormat {
        self.format
    }
}

impl RecordSource for RosterFile {
    fn fetch_all(&self) -> Result<Vec<PersonRecord>, RecordSourceError> {
        let file = std::fs::File::open(&self.path)?;
        let records = self.format.parse(std::io::BufReader::new(file))?;
        info!(
            path = %self.path.display(),
            rows = records.len(),
            "loaded alumni roster"
        );
        Ok(records)
    }
}

/// Fixed set of rows, for tests and demos.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    records: Vec<PersonRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<PersonRecord>) -> Self {
        Self { records }
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: RosterFormat,
    ) -> Result<Self, RecordSourceError> {
        let records = format.parse(reader)?;
        debug!(rows = records.len(), "parsed in-memory roster");
        Ok(Self { records })
    }
}

impl RecordSource for InMemorySource {
    fn fetch_all(&self) -> Result<Vec<PersonRecord>, RecordSourceError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            RosterFormat::from_path(Path::new("exports/alumni.JSON")),
            RosterFormat::Json
        );
        assert_eq!(
            RosterFormat::from_path(Path::new("alumni.csv")),
            RosterFormat::Csv
        );
        assert_eq!(RosterFormat::from_path(Path::new("alumni")), RosterFormat::Csv);
    }

    #[test]
    fn missing_roster_file_surfaces_io_error() {
        let source = RosterFile::new("./does-not-exist.csv");
        match source.fetch_all() {
            Err(RecordSourceError::Io(_)) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn in_memory_source_returns_every_row() {
        let source = InMemorySource::from_reader(
            Cursor::new("full_name,education_1\nA,PICT\nB,MIT\n"),
            RosterFormat::Csv,
        )
        .expect("roster parses");
        let rows = source.fetch_all().expect("fetch succeeds");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].education_1.as_deref(), Some("MIT"));
    }
}
