//! One-shot notices carried across a redirect.
//!
//! An action pushes a [`Notice`] and redirects; the page that renders next
//! takes every pending notice and shows it once.

use tower_sessions::Session;

use crate::models::{Notice, session_keys};

/// Queue a notice for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session cannot be read or modified.
pub async fn push_notice(
    session: &Session,
    notice: Notice,
) -> Result<(), tower_sessions::session::Error> {
    let mut pending: Vec<Notice> = session
        .get(session_keys::NOTICES)
        .await?
        .unwrap_or_default();
    pending.push(notice);
    session.insert(session_keys::NOTICES, pending).await
}

/// Take every pending notice, leaving none behind.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn take_notices(
    session: &Session,
) -> Result<Vec<Notice>, tower_sessions::session::Error> {
    Ok(session
        .remove::<Vec<Notice>>(session_keys::NOTICES)
        .await?
        .unwrap_or_default())
}
