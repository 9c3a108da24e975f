#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Session state: the client's belief about the currently authenticated
/// user.
///
/// Being logged in is derived from `user` being present, so the
/// "authenticated iff a user record exists" invariant holds by
/// construction. `pending` is true while a login or register call is in
/// flight; the session itself only ever transitions in the continuation
/// after that call resolves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub pending: bool,
}

impl SessionState {
    /// Whether a user is currently authenticated.
    pub fn logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Mark an auth request as in flight.
    pub fn begin_request(&mut self) {
        self.pending = true;
    }

    /// Mark an auth request as settled without changing the identity.
    /// Used when login/register fails: the session stays as it was.
    pub fn settle_request(&mut self) {
        self.pending = false;
    }

    /// Establish an authenticated session for `user`. Used for login,
    /// register, and restore from persisted state alike.
    pub fn establish(&mut self, user: User) {
        self.user = Some(user);
        self.pending = false;
    }

    /// Drop the session. Idempotent; logging out twice is a no-op.
    pub fn clear(&mut self) {
        self.user = None;
        self.pending = false;
    }
}
