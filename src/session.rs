//! Placeholder login flag
//!
//! Not a security boundary: "logged in" only means a token key is present.

use crate::consts::SESSION_KEY;
use crate::platform::KeyValueStore;

/// Value written under the session key on login
const TOKEN: &str = "token";

/// Where the login screen lives
pub const LOGIN_ROUTE: &str = "/login";

/// Routes that need a logged-in session
const PROTECTED_PREFIX: &str = "/habits";

pub fn login(store: &mut impl KeyValueStore) {
    if let Err(e) = store.set_item(SESSION_KEY, TOKEN) {
        log::error!("Failed to store session: {}", e);
    }
}

pub fn logout(store: &mut impl KeyValueStore) {
    if let Err(e) = store.remove_item(SESSION_KEY) {
        log::error!("Failed to clear session: {}", e);
    }
}

pub fn is_logged_in(store: &impl KeyValueStore) -> bool {
    matches!(store.get_item(SESSION_KEY), Ok(Some(_)))
}

/// Resolve navigation to `route`: protected routes redirect to the login
/// screen when logged out, `/` always goes to login.
pub fn guard<'a>(store: &impl KeyValueStore, route: &'a str) -> &'a str {
    if route == "/" {
        return LOGIN_ROUTE;
    }
    let protected = route == PROTECTED_PREFIX || route.starts_with("/habits/");
    if protected && !is_logged_in(store) {
        return LOGIN_ROUTE;
    }
    route
}
