use async_trait::async_trait;
use ferrous_zonecheck_domain::{DomainError, ZoneRecord};

/// Where the flat list of zone rows comes from (API dump, file, ...).
#[async_trait]
pub trait ZoneRecordSource: Send + Sync {
    async fn load_records(&self) -> Result<Vec<ZoneRecord>, DomainError>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}
