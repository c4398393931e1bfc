//! Session store
//!
//! Owns the authenticated identity, the auth flows and the pending-invite
//! list. The token/user pair is cached on disk and revalidated against
//! `GET /auth/me` on startup; a failed revalidation purges the cache and the
//! user starts unauthenticated.

use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use shared::client::{
    AuthData, CurrentUserData, LoginRequest, NotificationsData, ProfileUpdateRequest,
    SearchUserData, SearchUserRequest, SendOtpRequest, SignupRequest, VerifyOtpRequest,
};
use shared::models::{PendingInvite, User};
use shared::response::Empty;
use shared::ApiResponse;

use crate::http::{expect_data, HttpClient};
use crate::storage::{Credential, CredentialStorage};
use crate::{ClientError, ClientResult};

#[derive(Default)]
struct SessionInner {
    user: Option<User>,
    pending_invites: Vec<PendingInvite>,
    last_otp_sent: Option<Instant>,
}

/// Authenticated-identity owner
#[derive(Clone)]
pub struct SessionStore {
    http: HttpClient,
    storage: CredentialStorage,
    otp_resend: Duration,
    inner: Arc<RwLock<SessionInner>>,
}

impl SessionStore {
    /// Create a session store over the given gateway and credential file
    pub fn new(http: HttpClient, storage: CredentialStorage, otp_resend_secs: u64) -> Self {
        Self {
            http,
            storage,
            otp_resend: Duration::from_secs(otp_resend_secs),
            inner: Arc::new(RwLock::new(SessionInner::default())),
        }
    }

    // ========== Startup ==========

    /// Revalidate a persisted credential, if any
    ///
    /// The only startup side effect: a stored token is checked against the
    /// backend and purged when invalid. Returns the restored user, or `None`
    /// when the client starts unauthenticated.
    pub async fn restore(&self) -> ClientResult<Option<User>> {
        let Some(credential) = self.storage.load() else {
            return Ok(None);
        };
        self.http.set_token(&credential.token);

        match self.me().await {
            Ok(user) => {
                self.set_user(Some(user.clone()));
                tracing::info!("Session restored for {}", user.name);
                let _ = self.refresh_notifications().await;
                Ok(Some(user))
            }
            Err(e) => {
                tracing::debug!("Stored token rejected, starting unauthenticated: {}", e);
                self.purge();
                Ok(None)
            }
        }
    }

    // ========== Auth flows ==========

    /// Register a new account
    pub async fn signup(&self, name: &str, phone: &str, password: &str) -> ClientResult<User> {
        let request = SignupRequest {
            name: name.to_string(),
            phone: phone.to_string(),
            password: password.to_string(),
        };
        let data = self
            .http
            .post::<ApiResponse<AuthData>, _>("/auth/signup", &request)
            .await
            .map_err(as_auth_error)
            .and_then(expect_data)?;
        Ok(self.adopt(data).await)
    }

    /// Log in with phone and password
    pub async fn login(&self, phone: &str, password: &str) -> ClientResult<User> {
        let request = LoginRequest {
            phone: phone.to_string(),
            password: password.to_string(),
        };
        let data = self
            .http
            .post::<ApiResponse<AuthData>, _>("/auth/login", &request)
            .await
            .map_err(as_auth_error)
            .and_then(expect_data)?;
        Ok(self.adopt(data).await)
    }

    /// Request a one-time code
    ///
    /// A purely local resend throttle: attempts inside the window fail with a
    /// validation error carrying the remaining wait, without touching the
    /// network.
    pub async fn send_otp(&self, phone: &str) -> ClientResult<()> {
        if let Some(remaining) = self.otp_resend_remaining() {
            return Err(ClientError::Validation(format!(
                "OTP already sent, retry in {}s",
                remaining.as_secs().max(1)
            )));
        }

        let request = SendOtpRequest {
            phone: phone.to_string(),
        };
        self.http
            .post::<ApiResponse<Empty>, _>("/auth/send-otp", &request)
            .await
            .map_err(as_auth_error)
            .and_then(expect_data)?;

        if let Ok(mut inner) = self.inner.write() {
            inner.last_otp_sent = Some(Instant::now());
        }
        Ok(())
    }

    /// Time left before another OTP may be requested
    pub fn otp_resend_remaining(&self) -> Option<Duration> {
        let inner = self.inner.read().ok()?;
        let sent = inner.last_otp_sent?;
        self.otp_resend.checked_sub(sent.elapsed()).filter(|d| !d.is_zero())
    }

    /// Log in with a one-time code
    pub async fn verify_otp(&self, phone: &str, otp: &str) -> ClientResult<User> {
        let request = VerifyOtpRequest {
            phone: phone.to_string(),
            otp: otp.to_string(),
        };
        let data = self
            .http
            .post::<ApiResponse<AuthData>, _>("/auth/verify-otp", &request)
            .await
            .map_err(as_auth_error)
            .and_then(expect_data)?;
        Ok(self.adopt(data).await)
    }

    /// Drop the session: token, cached credential and pending invites
    pub fn logout(&self) {
        self.purge();
        tracing::info!("Logged out");
    }

    // ========== Profile ==========

    /// Fetch the current profile from the backend
    pub async fn me(&self) -> ClientResult<User> {
        let data = self
            .http
            .get::<ApiResponse<CurrentUserData>>("/auth/me")
            .await
            .and_then(expect_data)?;
        Ok(data.user)
    }

    /// Update the display name
    pub async fn update_profile(&self, name: &str) -> ClientResult<User> {
        let request = ProfileUpdateRequest {
            name: name.to_string(),
        };
        let data = self
            .http
            .put::<ApiResponse<CurrentUserData>, _>("/auth/profile", &request)
            .await
            .and_then(expect_data)?;

        if let Some(token) = self.http.token() {
            if let Err(e) = self.storage.save(&Credential::new(token, data.user.clone())) {
                tracing::warn!("Failed to persist updated profile: {}", e);
            }
        }
        self.set_user(Some(data.user.clone()));
        Ok(data.user)
    }

    /// Look up a user by phone; `Ok(None)` when nobody matches
    pub async fn search_user(&self, phone: &str) -> ClientResult<Option<User>> {
        let request = SearchUserRequest {
            phone: phone.to_string(),
        };
        match self
            .http
            .post::<ApiResponse<SearchUserData>, _>("/auth/search-user", &request)
            .await
        {
            Ok(response) if response.success => {
                Ok(response.data.and_then(|d| d.user))
            }
            Ok(_) => Ok(None),
            Err(ClientError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    // ========== Notifications ==========

    /// Re-fetch the pending-invite list (no-op while unauthenticated)
    pub async fn refresh_notifications(&self) -> ClientResult<()> {
        if !self.is_authenticated() {
            return Ok(());
        }
        let data = self
            .http
            .get::<ApiResponse<NotificationsData>>("/invites/notifications")
            .await
            .and_then(expect_data)?;
        tracing::debug!("Loaded {} pending invites", data.count);
        if let Ok(mut inner) = self.inner.write() {
            inner.pending_invites = data.pending_invites;
        }
        Ok(())
    }

    /// Accept a pending group invitation
    pub async fn accept_invitation(&self, group_id: &str) -> ClientResult<()> {
        self.http
            .post_empty::<ApiResponse<Empty>>(&format!("/invites/accept/{}", group_id))
            .await
            .and_then(expect_data)?;
        // The backend has no decline endpoint; the generic refresh prunes the list
        self.refresh_notifications().await
    }

    /// Current pending invites
    pub fn pending_invites(&self) -> Vec<PendingInvite> {
        self.inner
            .read()
            .map(|i| i.pending_invites.clone())
            .unwrap_or_default()
    }

    /// Number of pending invites
    pub fn notification_count(&self) -> usize {
        self.inner.read().map(|i| i.pending_invites.len()).unwrap_or(0)
    }

    // ========== State accessors ==========

    /// Currently authenticated user, if any
    pub fn current_user(&self) -> Option<User> {
        self.inner.read().ok().and_then(|i| i.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().map(|i| i.user.is_some()).unwrap_or(false)
    }

    // ========== Internals ==========

    async fn adopt(&self, data: AuthData) -> User {
        self.http.set_token(&data.token);
        if let Err(e) = self
            .storage
            .save(&Credential::new(&data.token, data.user.clone()))
        {
            tracing::warn!("Failed to persist credential: {}", e);
        }
        self.set_user(Some(data.user.clone()));
        tracing::info!("Authenticated as {}", data.user.name);
        // Identity changed, reload invites; failures here are not fatal
        let _ = self.refresh_notifications().await;
        data.user
    }

    fn set_user(&self, user: Option<User>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.user = user;
        }
    }

    fn purge(&self) {
        self.http.clear_token();
        if let Err(e) = self.storage.delete() {
            tracing::warn!("Failed to delete stored credential: {}", e);
        }
        if let Ok(mut inner) = self.inner.write() {
            inner.user = None;
            inner.pending_invites.clear();
        }
    }
}

/// Auth endpoints surface rejections as auth errors, not transport details
fn as_auth_error(e: ClientError) -> ClientError {
    match e {
        ClientError::Validation(m)
        | ClientError::Forbidden(m)
        | ClientError::Conflict(m)
        | ClientError::NotFound(m) => ClientError::Auth(m),
        ClientError::Unauthorized => ClientError::Auth("Invalid credentials".to_string()),
        other => other,
    }
}
