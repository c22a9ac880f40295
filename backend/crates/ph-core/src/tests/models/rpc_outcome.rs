use crate::RpcOutcome;

use serde_json::json;

#[test]
fn test_rpc_outcome_error_defaults_to_empty() {
    let outcome: RpcOutcome = serde_json::from_value(json!({ "success": true })).unwrap();

    assert_eq!(outcome, RpcOutcome::success());
}

#[test]
fn test_rpc_outcome_failure_keeps_message() {
    let outcome: RpcOutcome =
        serde_json::from_value(json!({ "success": false, "error": "profile offline" })).unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.error, "profile offline");
}
