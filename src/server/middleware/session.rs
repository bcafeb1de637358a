//! Type-safe session management wrapper.
//!
//! `AuthSession` is the only place that knows the session key used for the logged-in
//! manager, preventing typos and keeping the stored type consistent.

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_MANAGER_ID: &str = "auth:manager";

/// Authentication session management.
///
/// Handles the logged-in manager's id and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the manager's id in the session after a successful login.
    ///
    /// The session id is cycled first so a pre-login session id cannot be reused.
    ///
    /// # Returns
    /// - `Ok(())` - Manager id successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_manager_id(&self, mg_seq: i32) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_MANAGER_ID, mg_seq).await?;
        Ok(())
    }

    /// Retrieves the logged-in manager's id.
    ///
    /// # Returns
    /// - `Ok(Some(mg_seq))` - A manager is logged in
    /// - `Ok(None)` - Nobody is logged in
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_manager_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_MANAGER_ID).await?)
    }

    /// Deletes the session and all of its data.
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
