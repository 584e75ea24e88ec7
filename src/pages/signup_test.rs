use super::*;

// ==========================================================================
// Registration errors
// ==========================================================================

#[test]
fn signup_error_surfaces_backend_message() {
    let err = ApiError::Rejected {
        message: Some("email already registered".to_owned()),
    };

    assert_eq!(signup_error_text(&err), "email already registered");
}

#[test]
fn signup_error_falls_back_when_backend_is_silent() {
    let err = ApiError::Rejected { message: None };

    assert_eq!(signup_error_text(&err), "Sign up failed");
}

#[test]
fn signup_error_masks_transport_failures() {
    let err = ApiError::Network("connection refused".to_owned());

    assert_eq!(
        signup_error_text(&err),
        "An error occurred while signing up."
    );
}

// ==========================================================================
// Auto-login errors
// ==========================================================================

#[test]
fn auto_login_error_prefers_backend_message() {
    let err = ApiError::Rejected {
        message: Some("account locked".to_owned()),
    };

    assert_eq!(auto_login_error_text(&err), "account locked");
}

#[test]
fn auto_login_error_explains_manual_fallback() {
    let err = ApiError::Rejected { message: None };

    assert_eq!(
        auto_login_error_text(&err),
        "Login failed after successful sign-up. Please log in manually."
    );
}

#[test]
fn auto_login_network_error_keeps_user_on_form() {
    let err = ApiError::Network("fetch aborted".to_owned());

    assert_eq!(
        auto_login_error_text(&err),
        "An error occurred during auto-login. Please log in manually."
    );
    assert!(!auto_login_redirects(&err));
}

#[test]
fn rejected_auto_login_schedules_redirect() {
    let err = ApiError::Rejected { message: None };

    assert!(auto_login_redirects(&err));
}
