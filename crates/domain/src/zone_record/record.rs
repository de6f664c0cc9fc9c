use super::{RecordType, Ttl};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of a zone as returned by the zone API.
///
/// Only the owner name, type and TTL are interpreted; every other field of
/// the row (rdata, line index, serial, ...) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ZoneRecord {
    pub name: String,

    pub record_type: String,

    #[serde(default)]
    pub ttl: Ttl,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ZoneRecord {
    pub fn new(name: impl Into<String>, record_type: impl Into<String>, ttl: impl Into<Ttl>) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            ttl: ttl.into(),
            extra: Map::new(),
        }
    }

    /// The record type, if the row's tag names one exactly.
    pub fn known_type(&self) -> Option<RecordType> {
        RecordType::from_tag(&self.record_type)
    }

    /// Owner name without its trailing root dot.
    pub fn display_name(&self) -> &str {
        trim_trailing_dot(&self.name)
    }
}

pub fn trim_trailing_dot(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
