use super::*;
use serde_json::json;

// =============================================================
// CheckAuthResponse decoding
// =============================================================

#[test]
fn check_auth_decodes_signed_in_body() {
    let body = json!({"auth_status": true, "user_id": 7, "user_name": "alice"});
    let resp: CheckAuthResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.auth_status, Some(AuthStatus::new(true)));
    assert_eq!(resp.user_id, Some(json!(7)));
    assert_eq!(resp.user_name.as_deref(), Some("alice"));
    assert!(resp.error.is_none());
}

#[test]
fn check_auth_decodes_signed_out_body() {
    let body = json!({"auth_status": false, "error": "Session not found"});
    let resp: CheckAuthResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.auth_status, Some(AuthStatus::new(false)));
    assert_eq!(resp.error.as_deref(), Some("Session not found"));
    assert!(resp.user_name.is_none());
}

#[test]
fn check_auth_empty_object_has_no_status() {
    let resp: CheckAuthResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.auth_status.is_none());
}

#[test]
fn check_auth_null_status_is_none() {
    let resp: CheckAuthResponse = serde_json::from_str(r#"{"auth_status": null}"#).unwrap();
    assert!(resp.auth_status.is_none());
}

#[test]
fn check_auth_keeps_non_boolean_status() {
    let resp: CheckAuthResponse = serde_json::from_str(r#"{"auth_status": "guest"}"#).unwrap();
    assert_eq!(resp.auth_status, Some(AuthStatus::new("guest")));
}

#[test]
fn check_auth_rejects_scalar_body() {
    assert!(serde_json::from_str::<CheckAuthResponse>("true").is_err());
    assert!(serde_json::from_str::<CheckAuthResponse>("<html></html>").is_err());
}

// =============================================================
// AuthStatus
// =============================================================

#[test]
fn auth_status_is_authenticated_only_for_true() {
    assert!(AuthStatus::new(true).is_authenticated());
    assert!(!AuthStatus::new(false).is_authenticated());
    assert!(!AuthStatus::new("true").is_authenticated());
    assert!(!AuthStatus::new(1).is_authenticated());
}

#[test]
fn auth_status_serializes_transparently() {
    let status = AuthStatus::new(json!({"role": "guest"}));
    assert_eq!(serde_json::to_value(&status).unwrap(), json!({"role": "guest"}));
}

#[test]
fn auth_status_exposes_raw_value() {
    let status = AuthStatus::new(json!({"role": "guest"}));
    assert_eq!(status.as_value()["role"], "guest");
    assert_eq!(status.into_value(), json!({"role": "guest"}));
}

#[test]
fn auth_status_display_is_json() {
    assert_eq!(AuthStatus::new("guest").to_string(), "\"guest\"");
    assert_eq!(AuthStatus::new(false).to_string(), "false");
}
