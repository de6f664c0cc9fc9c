use super::{RecordSet, RecordSetIndex};
use crate::zone_record::{trim_trailing_dot, Ttl};
use serde::Serialize;
use std::fmt;

/// A problem with a record set that should block saving the zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordSetIssue {
    TtlMismatch {
        name: String,
        record_type: String,
        count: usize,
        ttls: Vec<Ttl>,
    },
    SingletonExcess {
        name: String,
        record_type: String,
        extra: usize,
    },
}

impl RecordSetIssue {
    /// Issues for one set: TTL mismatch first, then singleton excess.
    pub fn for_set(set: &RecordSet) -> Vec<RecordSetIssue> {
        let (Some(name), Some(record_type)) = (set.name(), set.record_type()) else {
            return Vec::new();
        };

        let mut issues = Vec::new();

        if set.ttls_mismatch() {
            issues.push(RecordSetIssue::TtlMismatch {
                name: trim_trailing_dot(name).to_string(),
                record_type: record_type.to_string(),
                count: set.count(),
                ttls: set.ttls(),
            });
        }

        if set.singleton_excess() {
            issues.push(RecordSetIssue::SingletonExcess {
                name: name.to_string(),
                record_type: record_type.to_string(),
                extra: set.count() - 1,
            });
        }

        issues
    }

    pub fn name(&self) -> &str {
        match self {
            RecordSetIssue::TtlMismatch { name, .. } | RecordSetIssue::SingletonExcess { name, .. } => {
                name
            }
        }
    }

    pub fn record_type(&self) -> &str {
        match self {
            RecordSetIssue::TtlMismatch { record_type, .. }
            | RecordSetIssue::SingletonExcess { record_type, .. } => record_type,
        }
    }
}

/// Every issue in the index, walking sets in first-seen order.
pub fn collect_issues(index: &RecordSetIndex) -> Vec<RecordSetIssue> {
    index.sets().flat_map(RecordSetIssue::for_set).collect()
}

impl fmt::Display for RecordSetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSetIssue::TtlMismatch {
                name,
                record_type,
                count,
                ttls,
            } => {
                let (records_have, values) = if *count == 1 {
                    ("record has", "value")
                } else {
                    ("records have", "values")
                };
                write!(
                    f,
                    "{}’s “{}” {} mismatched TTL {} ({}). Records of the same name and type must always have the same TTL value.",
                    name,
                    record_type,
                    records_have,
                    values,
                    list_and(ttls)
                )
            }
            RecordSetIssue::SingletonExcess {
                name,
                record_type,
                extra,
            } => write!(
                f,
                "Only 1 “{}” record may exist per name. Rename or delete {}’s extra “{}” {}.",
                record_type,
                name,
                record_type,
                if *extra == 1 { "record" } else { "records" }
            ),
        }
    }
}

/// English conjunction list: `a`, `a and b`, `a, b, and c`.
pub fn list_and<T: fmt::Display>(items: &[T]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{}, and {}", head.join(", "), last)
        }
    }
}
