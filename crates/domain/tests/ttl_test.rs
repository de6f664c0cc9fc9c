use ferrous_zonecheck_domain::Ttl;

#[test]
fn test_normalize_text() {
    assert_eq!(Ttl::from("3600").normalize(), Ttl::Seconds(3600));
    assert_eq!(Ttl::from("  42").normalize(), Ttl::Seconds(42));
    assert_eq!(Ttl::from("+7").normalize(), Ttl::Seconds(7));
    assert_eq!(Ttl::from("-5").normalize(), Ttl::Seconds(-5));
    assert_eq!(Ttl::from("300abc").normalize(), Ttl::Seconds(300));
    assert_eq!(Ttl::from("12.9").normalize(), Ttl::Seconds(12));
    assert_eq!(Ttl::from("0x1F").normalize(), Ttl::Seconds(0));
}

#[test]
fn test_normalize_rejects_non_numeric_text() {
    for text in ["", "   ", "abc", "-", "+", "NaN", "∞"] {
        assert_eq!(Ttl::from(text).normalize(), Ttl::Invalid, "{:?}", text);
    }
}

#[test]
fn test_normalize_overflow_is_invalid() {
    assert_eq!(Ttl::from("99999999999999999999").normalize(), Ttl::Invalid);
}

#[test]
fn test_normalize_fractional() {
    assert_eq!(Ttl::from(3600.0).normalize(), Ttl::Seconds(3600));
    assert_eq!(Ttl::from(7.9).normalize(), Ttl::Seconds(7));
    assert_eq!(Ttl::from(-0.5).normalize(), Ttl::Seconds(0));
    assert_eq!(Ttl::from(f64::NAN).normalize(), Ttl::Invalid);
    assert_eq!(Ttl::from(f64::INFINITY).normalize(), Ttl::Invalid);
}

#[test]
fn test_normalize_other_json() {
    assert_eq!(Ttl::from(true).normalize(), Ttl::Invalid);
    assert_eq!(
        Ttl::Other(serde_json::json!({"ttl": 300})).normalize(),
        Ttl::Invalid
    );
}

#[test]
fn test_matches() {
    assert!(Ttl::from("300").matches(&Ttl::Seconds(300)));
    assert!(!Ttl::Seconds(300).matches(&Ttl::Seconds(600)));
    assert!(!Ttl::Invalid.matches(&Ttl::Seconds(300)));
    assert!(!Ttl::Seconds(300).matches(&Ttl::Invalid));
    assert!(!Ttl::Invalid.matches(&Ttl::Invalid));
}

#[test]
fn test_display() {
    assert_eq!(Ttl::Seconds(300).to_string(), "300");
    assert_eq!(Ttl::Invalid.to_string(), "NaN");
}

#[test]
fn test_deserialize_shapes() {
    let ttls: Vec<Ttl> = serde_json::from_str(r#"[300, "600", 1.5, null, true]"#).unwrap();

    assert_eq!(
        ttls,
        vec![
            Ttl::Seconds(300),
            Ttl::Text("600".to_string()),
            Ttl::Fractional(1.5),
            Ttl::Invalid,
            Ttl::Other(serde_json::Value::Bool(true)),
        ]
    );
}

#[test]
fn test_invalid_serializes_as_null() {
    let json = serde_json::to_string(&vec![Ttl::Seconds(60), Ttl::Invalid]).unwrap();
    assert_eq!(json, "[60,null]");
}
