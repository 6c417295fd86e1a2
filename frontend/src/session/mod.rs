//! Session state: the bearer token and role handed out at sign-in.
//!
//! The pair lives in localStorage under the `token` and `role` keys and is
//! read by every authenticated request. Writes happen in exactly two places:
//! `save` (sign-in) and `clear` (sign-out). No expiry is tracked here; a
//! stale token surfaces as a 401 on the next call.

mod storage;

use crate::routes::{landing_route, Route};
use common::model::role::Role;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

/// Persists a freshly issued session. Only called from the login flow,
/// after the role spelling has been recognized.
pub fn save(session: &Session) {
    storage::set_item(TOKEN_KEY, &session.token);
    storage::set_item(ROLE_KEY, session.role.as_str());
}

/// Reads the persisted session. A token whose stored role no longer parses
/// is treated as absent, so the guard falls back to the login screen.
pub fn load() -> Option<Session> {
    let token = storage::get_item(TOKEN_KEY)?;
    if token.is_empty() {
        return None;
    }
    let role = Role::parse(&storage::get_item(ROLE_KEY)?)?;
    Some(Session { token, role })
}

/// Drops the persisted pair. Sign-out and transfer-driven invalidation both
/// end here.
pub fn clear() {
    storage::remove_item(TOKEN_KEY);
    storage::remove_item(ROLE_KEY);
}

/// Route to land on when the app boots with a persisted session; `None`
/// leaves the user on the login screen.
pub fn restore() -> Option<Route> {
    load().map(|session| landing_route(session.role))
}

/// Bearer token for request builders. Pages treat `None` as "session gone":
/// they surface the session error instead of calling the backend.
pub fn token() -> Option<String> {
    load().map(|session| session.token)
}
