//! Session-marker protocol.
//!
//! Each user owns at most one marker of the form `"<epochSeconds>:<RANDOM5>"`,
//! rewritten on every successful login. A token is honored only while the
//! marker's epoch prefix does not exceed the token's `iat`; bumping the
//! marker therefore invalidates every earlier token without a revocation
//! list, which is what enforces a single active session per user.

use chrono::Utc;

use crate::text::random_alphanumeric;

/// Length of the random suffix in a session id.
const SESSION_RANDOM_LEN: usize = 5;

/// Build a fresh session id stamped with the current epoch second.
pub fn new_session_id() -> String {
    format!(
        "{}:{}",
        Utc::now().timestamp(),
        random_alphanumeric(SESSION_RANDOM_LEN)
    )
}

/// Parse the epoch-seconds prefix of a stored session id.
fn marker_epoch(session_id: &str) -> Option<i64> {
    session_id.split(':').next()?.parse().ok()
}

/// Whether a token issued at `iat` is still live against the stored marker.
///
/// A marker written *after* the token was issued kills it. An unparsable
/// marker prefix counts as not live, forcing a re-login.
pub fn is_live(session_id: &str, iat: i64) -> bool {
    match marker_epoch(session_id) {
        Some(epoch) => epoch <= iat,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_has_epoch_prefix_and_random_suffix() {
        let id = new_session_id();
        let (epoch, random) = id.split_once(':').expect("separator");
        assert!(epoch.parse::<i64>().is_ok());
        assert_eq!(SESSION_RANDOM_LEN, random.len());
    }

    #[test]
    fn token_issued_after_marker_is_live() {
        assert!(is_live("1000:ABC12", 1000));
        assert!(is_live("1000:ABC12", 1500));
    }

    #[test]
    fn token_issued_before_marker_is_dead() {
        // A later login bumped the marker past this token's iat.
        assert!(!is_live("2000:ABC12", 1999));
    }

    #[test]
    fn malformed_marker_is_dead() {
        assert!(!is_live("garbage", 1000));
        assert!(!is_live(":ABC12", 1000));
        assert!(!is_live("", 1000));
    }
}
