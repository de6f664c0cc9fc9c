use ferrous_zonecheck_domain::{RecordSetIndex, Ttl};

mod helpers;
use helpers::record;

#[test]
fn test_empty_index() {
    let index = RecordSetIndex::new();

    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
    assert_eq!(index.record_count(), 0);
    assert_eq!(index.sets().count(), 0);
}

#[test]
fn test_query_creates_then_reuses() {
    let mut index = RecordSetIndex::new();

    index.query("foo.", "A").add(record("foo.", "A", "300"));
    index.query("foo.", "A").add(record("foo.", "A", "600"));

    assert_eq!(index.len(), 1);
    let set = index.get("foo.", "A").unwrap();
    assert_eq!(set.count(), 2);
    assert!(set.ttls_mismatch());
}

#[test]
fn test_groups_by_name_and_type() {
    let index: RecordSetIndex = vec![
        record("foo.", "A", "300"),
        record("foo.", "AAAA", "600"),
        record("bar.", "A", "300"),
        record("foo.", "A", "300"),
    ]
    .into_iter()
    .collect();

    assert_eq!(index.len(), 3);
    assert_eq!(index.record_count(), 4);
    assert_eq!(index.get("foo.", "A").unwrap().count(), 2);
    assert_eq!(index.get("foo.", "AAAA").unwrap().ttls(), vec![Ttl::Seconds(600)]);
    assert!(index.get("baz.", "A").is_none());
}

#[test]
fn test_sets_in_first_seen_order() {
    let index: RecordSetIndex = vec![
        record("b.", "TXT", "300"),
        record("a.", "TXT", "300"),
        record("b.", "TXT", "300"),
        record("c.", "MX", "300"),
    ]
    .into_iter()
    .collect();

    let names: Vec<_> = index.sets().filter_map(|s| s.name()).collect();
    assert_eq!(names, vec!["b.", "a.", "c."]);
}

#[test]
fn test_keys_are_exact() {
    let index: RecordSetIndex = vec![
        record("foo.", "A", "300"),
        record("foo", "A", "300"),
        record("foo.", "a", "300"),
    ]
    .into_iter()
    .collect();

    assert_eq!(index.len(), 3);
}

#[test]
fn test_name_containing_separator_does_not_collide() {
    let index: RecordSetIndex = vec![record("a:b", "c", "300"), record("a", "b:c", "300")]
        .into_iter()
        .collect();

    assert_eq!(index.len(), 2);
}
