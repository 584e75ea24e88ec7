use super::*;

fn sample_record() -> ProfileRecord {
    ProfileRecord {
        full_name: Some("Ada Lovelace".to_owned()),
        email: Some("ada@example.com".to_owned()),
        user_name: Some("ada".to_owned()),
    }
}

#[test]
fn default_state_is_loading() {
    let state = ProfileState::default();
    assert_eq!(state.phase, ProfilePhase::Loading);
    assert!(state.record.is_none());
    assert!(state.error.is_empty());
}

#[test]
fn displaying_carries_the_record() {
    let state = ProfileState::displaying(sample_record());
    assert_eq!(state.phase, ProfilePhase::Displaying);
    assert_eq!(state.record, Some(sample_record()));
    assert!(state.error.is_empty());
}

#[test]
fn failed_records_the_message() {
    let state = ProfileState::failed("You are not logged in.");
    assert_eq!(state.phase, ProfilePhase::Error);
    assert!(state.record.is_none());
    assert_eq!(state.error, "You are not logged in.");
}

#[test]
fn into_redirecting_keeps_the_message() {
    let state = ProfileState::failed("Session expired. Redirecting to login.").into_redirecting();
    assert_eq!(state.phase, ProfilePhase::Redirecting);
    assert_eq!(state.error, "Session expired. Redirecting to login.");
}

#[test]
fn error_branch_tracks_failure_phases() {
    assert!(ProfilePhase::Error.shows_error());
    assert!(ProfilePhase::Redirecting.shows_error());
    assert!(!ProfilePhase::Loading.shows_error());
    assert!(!ProfilePhase::Displaying.shows_error());
}

#[test]
fn record_branch_requires_the_displaying_phase() {
    assert!(ProfilePhase::Displaying.shows_record());
    assert!(!ProfilePhase::Loading.shows_record());
    assert!(!ProfilePhase::Error.shows_record());
    assert!(!ProfilePhase::Redirecting.shows_record());
}
