use crate::{Notification, Severity};

#[test]
fn test_notification_constructors_set_severity() {
    let info = Notification::info("stopping", "host_file");
    let warning = Notification::warning("busy", "host_file");

    assert_eq!(info.severity, Severity::Info);
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.message, "busy");
    assert_eq!(warning.category, "host_file");
}

#[test]
fn test_notification_serializes_severity_in_snake_case() {
    let notification = Notification::warning("busy", "host_file");
    let value = serde_json::to_value(&notification).unwrap();

    assert_eq!(value["severity"], "warning");
    assert_eq!(value["message"], "busy");
    assert!(value["created_at"].is_string());
}
