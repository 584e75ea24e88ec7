use super::*;

#[test]
fn api_url_joins_base_and_endpoint() {
    assert_eq!(api_url("login"), format!("{API_BASE_URL}/api/user/login"));
    assert_eq!(
        api_url("profile"),
        format!("{API_BASE_URL}/api/user/profile")
    );
}

#[test]
fn login_payload_uses_the_camel_case_user_name_key() {
    let payload = login_payload("a@b.com", "bob", "Abcdef12");
    assert_eq!(
        payload,
        serde_json::json!({
            "email": "a@b.com",
            "userName": "bob",
            "password": "Abcdef12",
        })
    );
}

#[test]
fn register_payload_uses_the_lowercase_username_key() {
    let payload = register_payload("a@b.com", "bob", "Abcdef12", "Bob Builder");
    assert_eq!(
        payload,
        serde_json::json!({
            "email": "a@b.com",
            "username": "bob",
            "password": "Abcdef12",
            "fullName": "Bob Builder",
        })
    );
}

#[test]
fn bearer_formats_the_authorization_value() {
    assert_eq!(bearer("tok"), "Bearer tok");
}

#[test]
fn extract_message_reads_non_empty_message_fields() {
    assert_eq!(
        extract_message(r#"{"message":"Invalid password"}"#).as_deref(),
        Some("Invalid password")
    );
}

#[test]
fn extract_message_ignores_blank_missing_or_malformed_bodies() {
    assert_eq!(extract_message(r#"{"message":""}"#), None);
    assert_eq!(extract_message(r#"{"error":"record not found"}"#), None);
    assert_eq!(extract_message("not json"), None);
    assert_eq!(extract_message(""), None);
}
