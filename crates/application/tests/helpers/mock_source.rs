#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_zonecheck_application::ports::ZoneRecordSource;
use ferrous_zonecheck_domain::{DomainError, ZoneRecord};
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockZoneRecordSource {
    records: Result<Vec<ZoneRecord>, DomainError>,
    loads: AtomicUsize,
}

impl MockZoneRecordSource {
    pub fn new(records: Vec<ZoneRecord>) -> Self {
        Self {
            records: Ok(records),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            records: Err(error),
            loads: AtomicUsize::new(0),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ZoneRecordSource for MockZoneRecordSource {
    async fn load_records(&self) -> Result<Vec<ZoneRecord>, DomainError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.records.clone()
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
