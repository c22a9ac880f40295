use crate::LifecycleRequest;

use serde_json::json;

#[test]
fn test_lifecycle_request_uses_webhook_field_names() {
    let request: LifecycleRequest = serde_json::from_value(json!({
        "c2_id": 3,
        "file_uuid": "uuid-1",
        "host_url": "/update"
    }))
    .unwrap();

    assert_eq!(request, LifecycleRequest::new(3, "uuid-1", "/update"));
}

#[test]
fn test_lifecycle_request_missing_fields_deserialize_as_none() {
    let request: LifecycleRequest = serde_json::from_value(json!({ "c2_id": 3 })).unwrap();

    assert_eq!(request.profile_id, Some(3));
    assert!(request.content_id.is_none());
    assert!(request.target_location.is_none());
}

#[test]
fn test_lifecycle_request_mistyped_field_fails_to_deserialize() {
    let result: Result<LifecycleRequest, _> =
        serde_json::from_value(json!({ "c2_id": "not-a-number" }));

    assert!(result.is_err());
}
