use async_trait::async_trait;
use ferrous_zonecheck_application::ports::ZoneRecordSource;
use ferrous_zonecheck_domain::{DomainError, ZoneRecord};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// Reads zone rows from a JSON file.
///
/// Accepts a bare array of records or a zone API response envelope with the
/// rows under `records` (or `data`).
pub struct JsonFileRecordSource {
    path: PathBuf,
}

impl JsonFileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsDocument {
    Bare(Vec<ZoneRecord>),
    Envelope {
        #[serde(alias = "data")]
        records: Vec<ZoneRecord>,
    },
}

pub fn parse_records(contents: &str) -> Result<Vec<ZoneRecord>, DomainError> {
    let document: RecordsDocument = serde_json::from_str(contents)
        .map_err(|e| DomainError::InvalidRecordData(e.to_string()))?;

    Ok(match document {
        RecordsDocument::Bare(records) => records,
        RecordsDocument::Envelope { records } => records,
    })
}

#[async_trait]
impl ZoneRecordSource for JsonFileRecordSource {
    async fn load_records(&self) -> Result<Vec<ZoneRecord>, DomainError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), bytes = contents.len(), "Read zone record file");

        parse_records(&contents)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
