//! Tiffin Client - table booking and group ordering over the Tiffin REST API
//!
//! The building blocks are explicit store objects wired together at the
//! application root: a session store for identity, a group registry for the
//! active reservation, a cart engine that reconciles local edits with the
//! shared group order, and a menu catalog with an offline fallback. No
//! module-level state; everything hangs off [`TiffinClient`].

pub mod admin;
pub mod cart;
pub mod config;
pub mod error;
pub mod group;
pub mod http;
pub mod menu;
pub mod session;
pub mod storage;
pub mod weather;

pub use admin::AdminClient;
pub use cart::{CartSync, SyncOutcome, SyncState};
pub use config::{ClientConfig, SyncConfig};
pub use error::{ClientError, ClientResult};
pub use group::GroupRegistry;
pub use http::HttpClient;
pub use menu::{LoadedMenu, MenuCatalog, MenuSource};
pub use session::SessionStore;
pub use storage::{Credential, CredentialStorage};
pub use weather::WeatherClient;

// Re-export shared types for convenience
pub use shared::models;
pub use shared::ApiResponse;

use std::path::PathBuf;

/// Application root: one gateway, one store per concern
///
/// ```no_run
/// # async fn demo() -> tiffin_client::ClientResult<()> {
/// use tiffin_client::{ClientConfig, TiffinClient};
///
/// let app = TiffinClient::new(ClientConfig::from_env(), "/var/lib/tiffin")?;
/// if app.session.restore().await?.is_none() {
///     app.session.login("9876543210", "secret").await?;
/// }
/// let cart = app.cart()?;
/// cart.set_current_group(Some("g1".into())).await?;
/// # Ok(())
/// # }
/// ```
pub struct TiffinClient {
    config: ClientConfig,
    http: HttpClient,
    pub session: SessionStore,
    pub groups: GroupRegistry,
    pub menu: MenuCatalog,
    pub weather: WeatherClient,
}

impl TiffinClient {
    /// Wire up all stores against one backend and credential directory
    pub fn new(config: ClientConfig, data_dir: impl Into<PathBuf>) -> ClientResult<Self> {
        let data_dir = data_dir.into();
        let storage = CredentialStorage::new(&data_dir, "session");
        let http = HttpClient::new(&config)?.with_storage(storage.clone());

        Ok(Self {
            session: SessionStore::new(http.clone(), storage, config.otp_resend_secs),
            groups: GroupRegistry::new(http.clone()),
            menu: MenuCatalog::new(http.clone()),
            weather: WeatherClient::new(http.clone()),
            http,
            config,
        })
    }

    /// Cart engine for the authenticated user
    ///
    /// Requires a logged-in session: every cart line is stamped with the
    /// owner's user id.
    pub fn cart(&self) -> ClientResult<CartSync> {
        let user = self
            .session
            .current_user()
            .ok_or(ClientError::Unauthorized)?;
        Ok(CartSync::new(self.http.clone(), user, self.config.sync))
    }

    /// Admin panel client with its own token slot
    pub fn admin(&self) -> ClientResult<AdminClient> {
        Ok(AdminClient::new(HttpClient::new(&self.config)?))
    }

    /// The shared gateway (mainly for diagnostics)
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
