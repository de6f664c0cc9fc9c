use ferrous_zonecheck_domain::RecordSetIssue;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneCheckReport {
    pub record_count: usize,
    pub set_count: usize,
    pub issues: Vec<RecordSetIssue>,
}

impl ZoneCheckReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}
