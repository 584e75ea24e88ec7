#![cfg(not(feature = "hydrate"))]

use super::*;

// =========================================================================
// Cookie string formatting / parsing
// =========================================================================

#[test]
fn set_cookie_formats_key_value_and_path() {
    assert_eq!(
        format_set_cookie("email", "a%40b.com", None),
        "email=a%40b.com; path=/"
    );
}

#[test]
fn set_cookie_includes_an_expiry_when_given() {
    assert_eq!(
        format_set_cookie("access_token", "tok", Some("Fri, 29 Aug 2025 00:00:00 GMT")),
        "access_token=tok; expires=Fri, 29 Aug 2025 00:00:00 GMT; path=/"
    );
}

#[test]
fn expired_cookie_uses_the_epoch() {
    assert_eq!(
        format_expired_cookie("userName"),
        "userName=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/"
    );
}

#[test]
fn parse_value_finds_keys_anywhere_in_the_header() {
    let cookies = "access_token=tok; userName=bob; email=a%40b.com";
    assert_eq!(
        parse_cookie_value(cookies, "access_token").as_deref(),
        Some("tok")
    );
    assert_eq!(parse_cookie_value(cookies, "userName").as_deref(), Some("bob"));
    assert_eq!(
        parse_cookie_value(cookies, "email").as_deref(),
        Some("a%40b.com")
    );
}

#[test]
fn parse_value_keeps_equals_signs_inside_values() {
    assert_eq!(
        parse_cookie_value("token=abc=def", "token").as_deref(),
        Some("abc=def")
    );
}

#[test]
fn parse_value_misses_absent_keys() {
    assert_eq!(parse_cookie_value("a=1; b=2", "c"), None);
    assert_eq!(parse_cookie_value("", "a"), None);
}

#[test]
fn parse_names_lists_every_entry() {
    assert_eq!(parse_cookie_names("a=1; b=2; c=3"), vec!["a", "b", "c"]);
}

#[test]
fn parse_names_handles_an_empty_header() {
    assert!(parse_cookie_names("").is_empty());
}

// =========================================================================
// Off-browser stubs
// =========================================================================

#[test]
fn cookie_store_reads_none_off_browser() {
    assert_eq!(CookieStore.get("access_token"), None);
}

#[test]
fn cookie_store_writes_are_noops_off_browser() {
    CookieStore.set("access_token", "tok", Some(7));
    CookieStore.remove("access_token");
    CookieStore.clear_all();
    assert_eq!(CookieStore.get("access_token"), None);
}
