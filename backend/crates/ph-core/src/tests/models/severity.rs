use crate::Severity;

#[test]
fn test_severity_as_str() {
    assert_eq!(Severity::Info.as_str(), "info");
    assert_eq!(Severity::Warning.as_str(), "warning");
}

#[test]
fn test_severity_wire_form_matches_display() {
    for severity in [Severity::Info, Severity::Warning] {
        let json = serde_json::to_string(&severity).unwrap();
        assert_eq!(json, format!("\"{}\"", severity));
    }

    let parsed: Severity = serde_json::from_str("\"warning\"").unwrap();
    assert_eq!(parsed, Severity::Warning);
    assert!(serde_json::from_str::<Severity>("\"error\"").is_err());
}
