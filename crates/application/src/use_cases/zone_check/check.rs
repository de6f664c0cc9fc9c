use std::sync::Arc;

use ferrous_zonecheck_domain::{collect_issues, DomainError, RecordSetIndex, ZoneRecord};
use tracing::{debug, info, warn};

use super::ZoneCheckReport;
use crate::ports::ZoneRecordSource;

pub struct CheckZoneRecordsUseCase {
    source: Arc<dyn ZoneRecordSource>,
}

impl CheckZoneRecordsUseCase {
    pub fn new(source: Arc<dyn ZoneRecordSource>) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> Result<ZoneCheckReport, DomainError> {
        let origin = self.source.describe();
        let records = self.source.load_records().await?;
        debug!(source = %origin, records = records.len(), "Loaded zone records");

        let report = Self::check(records);

        for issue in &report.issues {
            warn!(name = issue.name(), record_type = issue.record_type(), "{}", issue);
        }

        info!(
            source = %origin,
            records = report.record_count,
            sets = report.set_count,
            issues = report.issues.len(),
            "Zone record check complete"
        );

        Ok(report)
    }

    /// Groups `records` into sets and reports their issues.
    pub fn check(records: Vec<ZoneRecord>) -> ZoneCheckReport {
        let index: RecordSetIndex = records.into_iter().collect();
        debug!(sets = index.len(), "Grouped zone records into record sets");

        ZoneCheckReport {
            record_count: index.record_count(),
            set_count: index.len(),
            issues: collect_issues(&index),
        }
    }
}
