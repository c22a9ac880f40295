use crate::HostedContentRef;

#[test]
fn test_live_content_is_hostable() {
    let content = HostedContentRef::new("uuid-1", false);
    assert!(content.is_hostable());
}

#[test]
fn test_deleted_content_is_not_hostable() {
    let content = HostedContentRef::new("uuid-1", true);
    assert!(!content.is_hostable());
}
