use super::*;

#[test]
fn rejected_displays_the_server_message() {
    let err = ApiError::Rejected {
        message: Some("Invalid password".to_owned()),
    };
    assert_eq!(err.to_string(), "Invalid password");
}

#[test]
fn rejected_without_a_message_has_a_generic_display() {
    let err = ApiError::Rejected { message: None };
    assert_eq!(err.to_string(), "request rejected");
}

#[test]
fn session_expired_and_network_displays_are_stable() {
    assert_eq!(ApiError::SessionExpired.to_string(), "session expired");
    assert_eq!(
        ApiError::Network("timeout".to_owned()).to_string(),
        "network error: timeout"
    );
}

#[test]
fn surface_or_prefers_the_server_message() {
    assert_eq!(
        surface_or(Some("Email already registered"), "Sign up failed"),
        "Email already registered"
    );
}

#[test]
fn surface_or_falls_back_on_missing_or_blank() {
    assert_eq!(surface_or(None, "Sign up failed"), "Sign up failed");
    assert_eq!(surface_or(Some(""), "Sign up failed"), "Sign up failed");
}
