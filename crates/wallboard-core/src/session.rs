//! Session state and the premium entitlement gate.

use tracing::info;
use wallboard_api::BoardClient;

use crate::error::Result;

/// Access level required for gated boards.
pub const PREMIUM_LEVEL: u8 = 5;

/// Boards whose content requires [`PREMIUM_LEVEL`]. Must match the check
/// the server runs on the download endpoint, or the client would show a
/// false unlock followed by a server-side denial.
pub const GATED_BOARDS: [&str; 2] = ["wallpaper_premium", "wallpaper_video"];

/// Client auth state. Replaced atomically by a successful login, reset
/// unconditionally by logout; never partially updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Whether a member is logged in.
    pub is_logged_in: bool,
    /// Access tier; 1 is the anonymous default.
    pub level: u8,
    /// Opaque session credential, absent while logged out.
    pub token: Option<String>,
    /// Member display name, empty while logged out.
    pub display_name: String,
}

impl Session {
    /// The start and post-logout state: anonymous, level 1.
    #[must_use]
    pub const fn logged_out() -> Self {
        Self {
            is_logged_in: false,
            level: 1,
            token: None,
            display_name: String::new(),
        }
    }

    /// Whether this session may view and download posts of `board_id`.
    ///
    /// Advisory only: the server enforces the same rule on the actual
    /// download endpoint.
    #[must_use]
    pub fn is_entitled(&self, board_id: &str) -> bool {
        !GATED_BOARDS.contains(&board_id) || self.level >= PREMIUM_LEVEL
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::logged_out()
    }
}

/// Logs in and returns the replacement session.
///
/// # Errors
///
/// Returns an error for empty or rejected credentials; the caller keeps
/// its current session in that case.
pub async fn login(client: &BoardClient, username: &str, password: &str) -> Result<Session> {
    let outcome = client.login(username, password).await?;
    info!(member = %outcome.member_id, level = outcome.level, "logged in");
    let display_name = if outcome.name.is_empty() {
        outcome.member_id
    } else {
        outcome.name
    };
    Ok(Session {
        is_logged_in: true,
        level: outcome.level,
        token: Some(outcome.token),
        display_name,
    })
}

/// Logs out: fires the best-effort server-side invalidation and returns
/// the logged-out session. Local state is cleared no matter what the
/// network does.
pub async fn logout(client: &BoardClient, session: Session) -> Session {
    if let Some(token) = session.token {
        client.logout(&token).await;
    }
    info!("logged out");
    Session::logged_out()
}
