use super::*;

fn test_user() -> User {
    User {
        id: "u-1".to_owned(),
        name: "Ada".to_owned(),
        email: "a@b.com".to_owned(),
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_has_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.logged_in());
}

#[test]
fn default_session_is_not_pending() {
    let state = SessionState::default();
    assert!(!state.pending);
}

// =============================================================
// Establish / clear
// =============================================================

#[test]
fn establish_sets_user_and_logged_in() {
    let mut state = SessionState::default();
    state.establish(test_user());

    assert!(state.logged_in());
    assert_eq!(state.user, Some(test_user()));
}

#[test]
fn establish_settles_a_pending_request() {
    let mut state = SessionState::default();
    state.begin_request();
    assert!(state.pending);

    state.establish(test_user());
    assert!(!state.pending);
}

#[test]
fn establish_replaces_an_existing_session() {
    let mut state = SessionState::default();
    state.establish(test_user());

    let other = User {
        id: "u-2".to_owned(),
        name: "Grace".to_owned(),
        email: "g@h.com".to_owned(),
    };
    state.establish(other.clone());

    assert_eq!(state.user, Some(other));
}

#[test]
fn clear_returns_to_unauthenticated() {
    let mut state = SessionState::default();
    state.establish(test_user());

    state.clear();
    assert!(!state.logged_in());
    assert!(state.user.is_none());
}

#[test]
fn clear_is_idempotent() {
    let mut state = SessionState::default();
    state.clear();
    state.clear();
    assert_eq!(state, SessionState::default());
}

// =============================================================
// Failed requests leave the session unchanged
// =============================================================

#[test]
fn settle_request_keeps_identity() {
    let mut state = SessionState::default();
    state.establish(test_user());

    state.begin_request();
    state.settle_request();

    assert!(state.logged_in());
    assert_eq!(state.user, Some(test_user()));
    assert!(!state.pending);
}

#[test]
fn failed_login_from_logged_out_stays_logged_out() {
    let mut state = SessionState::default();
    state.begin_request();
    state.settle_request();

    assert!(!state.logged_in());
}
