//! Session service - sign-in, cold-start restore and sign-out

use std::sync::Arc;

use jobmatch_common::{SessionStore, StorageKey};
use jobmatch_domain::constants::{
    GOOGLE_SIGN_IN_FAILED, LOGIN_FAILED, NO_USER_LOGGED_IN, PROFILE_UPDATE_FAILED,
    REGISTRATION_FAILED,
};
use jobmatch_domain::{
    ApiResponse, AuthResponse, JobMatchError, LoginCredentials, RegisterData, Result, Session,
    User, UserUpdate,
};
use tracing::{debug, info, instrument, warn};

use super::ports::AuthPort;
use crate::user::ports::UsersPort;

/// Session service
///
/// Owns the persisted credential state on behalf of the front end. The API
/// client reads the same store for every request and rewrites the token pair
/// on refresh, so the service never caches tokens itself.
pub struct SessionService {
    auth: Arc<dyn AuthPort>,
    users: Arc<dyn UsersPort>,
    store: SessionStore,
}

impl SessionService {
    /// Create a new session service
    pub fn new(auth: Arc<dyn AuthPort>, users: Arc<dyn UsersPort>, store: SessionStore) -> Self {
        Self { auth, users, store }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Sign in with email and password.
    #[instrument(skip_all, fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<Session> {
        let response =
            self.auth.login(credentials).await.map_err(|e| e.with_fallback(LOGIN_FAILED))?;
        self.establish(response, LOGIN_FAILED).await
    }

    /// Create an account and sign in.
    #[instrument(skip_all, fields(email = %data.email))]
    pub async fn register(&self, data: &RegisterData) -> Result<Session> {
        let response =
            self.auth.register(data).await.map_err(|e| e.with_fallback(REGISTRATION_FAILED))?;
        self.establish(response, REGISTRATION_FAILED).await
    }

    /// Exchange an identity-provider ID token for a session.
    #[instrument(skip_all)]
    pub async fn login_with_google(&self, id_token: &str) -> Result<Session> {
        let response = self
            .auth
            .login_with_google(id_token)
            .await
            .map_err(|e| e.with_fallback(GOOGLE_SIGN_IN_FAILED))?;
        self.establish(response, GOOGLE_SIGN_IN_FAILED).await
    }

    /// Restore a session persisted by an earlier run.
    ///
    /// The stored access token is checked with `POST /auth/verify`. When the
    /// server rejects it, or verification fails for any other reason, the
    /// access token and profile are removed and `None` is returned.
    #[instrument(skip_all)]
    pub async fn load_stored_auth(&self) -> Option<Session> {
        if !self.store.has_session().await {
            debug!("No stored session");
            return None;
        }

        let token = self.store.access_token().await?;
        let Some(user) = self.store.user_profile::<User>().await else {
            self.discard_stored_session("stored profile is unreadable").await;
            return None;
        };

        match self.auth.verify_token(&token).await {
            Ok(response) if response.success => {
                // Verification may have gone through a refresh.
                let token = self.store.access_token().await.unwrap_or(token);
                info!(user_id = %user.id, "Restored stored session");
                Some(Session { user, token })
            }
            Ok(response) => {
                self.discard_stored_session(response.message_or("token rejected")).await;
                None
            }
            Err(e) => {
                self.discard_stored_session(&e.to_string()).await;
                None
            }
        }
    }

    /// Remove every persisted credential entry.
    #[instrument(skip_all)]
    pub async fn logout(&self) {
        self.store.clear().await;
        info!("Signed out");
    }

    /// Cached profile of the signed-in user.
    pub async fn current_user(&self) -> Option<User> {
        self.store.user_profile().await
    }

    /// Update the signed-in user's profile and re-cache it.
    ///
    /// # Errors
    /// `Auth` when nobody is signed in; otherwise the API or storage error.
    #[instrument(skip_all)]
    pub async fn update_profile(&self, update: &UserUpdate) -> Result<User> {
        let current = self
            .current_user()
            .await
            .ok_or_else(|| JobMatchError::Auth(NO_USER_LOGGED_IN.to_string()))?;

        let updated = self
            .users
            .update_user(&current.id, update)
            .await
            .map_err(|e| e.with_fallback(PROFILE_UPDATE_FAILED))?
            .into_data(PROFILE_UPDATE_FAILED)?;

        self.store.store_profile(&updated).await?;
        info!(user_id = %updated.id, "Profile updated");
        Ok(updated)
    }

    async fn establish(
        &self,
        response: ApiResponse<AuthResponse>,
        fallback: &str,
    ) -> Result<Session> {
        let auth = response.into_data(fallback)?;
        let tokens = auth.token_pair();
        self.store.store_session(&tokens, &auth.user).await?;

        info!(user_id = %auth.user.id, "Signed in");
        Ok(Session { user: auth.user, token: tokens.access_token })
    }

    async fn discard_stored_session(&self, reason: &str) {
        warn!(reason, "Discarding stored session");
        self.store.clear_keys(&[StorageKey::AccessToken, StorageKey::UserProfile]).await;
    }
}
