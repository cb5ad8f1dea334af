//! Transient flash notifications.
//!
//! Fire-and-forget messages queued in the session by one handler and
//! drained by the next full page render. Used after add-to-cart and after
//! checkout completion/failure.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use super::session::keys;

/// Visual style of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

impl std::fmt::Display for FlashLevel {
    /// Renders the CSS modifier class suffix (`success` / `error`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Error => "error",
        })
    }
}

/// A transient message shown once on the next page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub title: String,
    pub message: String,
    pub level: FlashLevel,
}

impl Flash {
    /// A success-styled flash.
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: FlashLevel::Success,
        }
    }

    /// A failure-styled flash.
    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            level: FlashLevel::Error,
        }
    }
}

/// Queue a flash message for the next page render.
///
/// Queueing is fire-and-forget: a failed session write drops the message
/// but never fails the request that queued it.
pub async fn push_flash(session: &Session, flash: Flash) {
    let mut queued: Vec<Flash> = session
        .get(keys::FLASH)
        .await
        .ok()
        .flatten()
        .unwrap_or_default();
    queued.push(flash);

    if let Err(e) = session.insert(keys::FLASH, &queued).await {
        tracing::warn!("Failed to queue flash message: {e}");
    }
}

/// Drain all queued flash messages.
pub async fn take_flashes(session: &Session) -> Vec<Flash> {
    session
        .remove::<Vec<Flash>>(keys::FLASH)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}
