use super::*;

// =========================================================================
// Email
// =========================================================================

#[test]
fn email_accepts_typical_addresses() {
    assert!(is_valid_email("user@example.com"));
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@sub.example.com"));
}

#[test]
fn email_requires_an_at_sign() {
    assert!(!is_valid_email("userexample.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn email_rejects_a_missing_local_part() {
    assert!(!is_valid_email("@example.com"));
}

#[test]
fn email_rejects_whitespace_anywhere() {
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email("user@exa mple.com"));
    assert!(!is_valid_email(" user@example.com"));
}

#[test]
fn email_rejects_multiple_at_signs() {
    assert!(!is_valid_email("user@@example.com"));
    assert!(!is_valid_email("user@ex@ample.com"));
}

#[test]
fn email_requires_a_dot_inside_the_domain() {
    assert!(!is_valid_email("user@example"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@example."));
    assert!(!is_valid_email("user@.."));
}

#[test]
fn email_accepts_edge_dots_beside_an_interior_one() {
    assert!(is_valid_email("a@b.c."));
    assert!(is_valid_email("a@.b.c"));
    assert!(is_valid_email("a@..c"));
}

#[test]
fn email_message_maps_validity_to_text() {
    assert_eq!(email_message("user@example.com"), "");
    assert_eq!(email_message("nope"), EMAIL_ERROR);
}

// =========================================================================
// Password
// =========================================================================

#[test]
fn password_accepts_all_classes_at_minimum_length() {
    assert!(is_valid_password("Abcdef12"));
}

#[test]
fn password_rejects_short_values() {
    assert!(!is_valid_password("Abc12de"));
}

#[test]
fn password_requires_an_uppercase_letter() {
    assert!(!is_valid_password("abcdef12"));
}

#[test]
fn password_requires_a_lowercase_letter() {
    assert!(!is_valid_password("ABCDEF12"));
}

#[test]
fn password_requires_a_digit() {
    assert!(!is_valid_password("Abcdefgh"));
}

#[test]
fn password_message_maps_validity_to_text() {
    assert_eq!(password_message("Abcdef12"), "");
    assert_eq!(password_message("short"), PASSWORD_ERROR);
}

// =========================================================================
// Username / full name
// =========================================================================

#[test]
fn username_requires_three_characters() {
    assert_eq!(username_message("ab"), USERNAME_ERROR);
    assert_eq!(username_message("bob"), "");
}

#[test]
fn full_name_requires_three_characters() {
    assert_eq!(full_name_message("Al"), FULL_NAME_ERROR);
    assert_eq!(full_name_message("Ada Lovelace"), "");
}
