#![allow(dead_code)]
use ferrous_zonecheck_domain::{Ttl, ZoneRecord};

pub struct ZoneRecordBuilder {
    name: String,
    record_type: String,
    ttl: Ttl,
}

impl ZoneRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com.".to_string(),
            record_type: "A".to_string(),
            ttl: Ttl::Text("14400".to_string()),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: &str) -> Self {
        self.record_type = record_type.to_string();
        self
    }

    pub fn ttl(mut self, ttl: impl Into<Ttl>) -> Self {
        self.ttl = ttl.into();
        self
    }

    pub fn build(self) -> ZoneRecord {
        ZoneRecord::new(self.name, self.record_type, self.ttl)
    }
}

impl Default for ZoneRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn record(name: &str, record_type: &str, ttl: &str) -> ZoneRecord {
    ZoneRecordBuilder::new()
        .name(name)
        .record_type(record_type)
        .ttl(ttl)
        .build()
}
