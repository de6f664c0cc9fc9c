use crate::zone_record::{Ttl, ZoneRecord};

/// Records sharing one owner name and type, accumulated row by row.
///
/// The set does not check that added records really share a name and type;
/// grouping is the caller's job (see [`RecordSetIndex`](super::RecordSetIndex)).
/// `name()` and `record_type()` report the first record added.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSet {
    records: Vec<ZoneRecord>,
    reference_ttl: Option<Ttl>,
    ttls_all_match: bool,
}

impl RecordSet {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            reference_ttl: None,
            ttls_all_match: true,
        }
    }

    /// Appends a record, rewriting its TTL to the parsed form first.
    ///
    /// The first record's TTL becomes the reference. Once any later TTL
    /// differs from it the set stays mismatched, whatever is added after.
    /// Unparseable TTLs never match, so they always count as a mismatch
    /// unless they are the only record.
    pub fn add(&mut self, mut record: ZoneRecord) {
        record.ttl = record.ttl.normalize();

        match &self.reference_ttl {
            None => self.reference_ttl = Some(record.ttl.clone()),
            Some(reference) => {
                if !reference.matches(&record.ttl) {
                    self.ttls_all_match = false;
                }
            }
        }

        self.records.push(record);
    }

    pub fn ttls_mismatch(&self) -> bool {
        !self.ttls_all_match
    }

    /// More than one record of a type that allows only one per name.
    pub fn singleton_excess(&self) -> bool {
        let singleton = self
            .records
            .first()
            .and_then(ZoneRecord::known_type)
            .is_some_and(|record_type| record_type.is_singleton());

        singleton && self.records.len() > 1
    }

    /// Distinct TTLs in the order they were first seen.
    pub fn ttls(&self) -> Vec<Ttl> {
        let mut distinct: Vec<Ttl> = Vec::new();
        for record in &self.records {
            if !distinct.contains(&record.ttl) {
                distinct.push(record.ttl.clone());
            }
        }
        distinct
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Owner name of the first record, `None` until something is added.
    pub fn name(&self) -> Option<&str> {
        self.records.first().map(|r| r.name.as_str())
    }

    /// Type of the first record, `None` until something is added.
    pub fn record_type(&self) -> Option<&str> {
        self.records.first().map(|r| r.record_type.as_str())
    }

    pub fn records(&self) -> &[ZoneRecord] {
        &self.records
    }
}

impl Default for RecordSet {
    fn default() -> Self {
        Self::new()
    }
}
