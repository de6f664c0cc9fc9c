use super::RecordSet;
use crate::zone_record::ZoneRecord;
use rustc_hash::FxHashMap;

/// Groups zone rows into record sets keyed by exact `(name, type)`.
///
/// Sets are kept in the order their key was first seen.
#[derive(Debug, Clone, Default)]
pub struct RecordSetIndex {
    sets: Vec<RecordSet>,
    positions: FxHashMap<(String, String), usize>,
}

impl RecordSetIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// The set for `name` + `record_type`, created empty on first lookup.
    pub fn query(&mut self, name: &str, record_type: &str) -> &mut RecordSet {
        let next = self.sets.len();
        let slot = *self
            .positions
            .entry((name.to_string(), record_type.to_string()))
            .or_insert(next);

        if slot == next {
            self.sets.push(RecordSet::new());
        }

        &mut self.sets[slot]
    }

    pub fn add(&mut self, record: ZoneRecord) {
        self.query(&record.name, &record.record_type).add(record);
    }

    pub fn get(&self, name: &str, record_type: &str) -> Option<&RecordSet> {
        self.positions
            .get(&(name.to_string(), record_type.to_string()))
            .map(|&slot| &self.sets[slot])
    }

    pub fn sets(&self) -> impl Iterator<Item = &RecordSet> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.sets.iter().map(RecordSet::count).sum()
    }
}

impl FromIterator<ZoneRecord> for RecordSetIndex {
    fn from_iter<I: IntoIterator<Item = ZoneRecord>>(records: I) -> Self {
        let mut index = Self::new();
        for record in records {
            index.add(record);
        }
        index
    }
}
