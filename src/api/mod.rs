use crate::api::error::ApiError;
use crate::models::{Account, ActionResponse, StatusSnapshot, UrlEntry};

pub(crate) mod client;
pub use client::BotApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// HTTP surface of the bot control backend.
///
/// Action endpoints resolve to `Ok` whenever the backend answered with a JSON
/// body, including `{"success": false}`; `Err` means transport or decoding
/// failed.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait BotApi: Send + Sync {
    /// Base URL requests are sent to.
    fn base_url(&self) -> String;

    /// `GET /api/status`
    async fn get_status(&self) -> Result<StatusSnapshot, ApiError>;

    /// `GET /api/accounts`
    async fn get_accounts(&self) -> Result<Vec<Account>, ApiError>;

    /// `POST /api/accounts`
    async fn add_account(&self, email: &str, proxy: &str) -> Result<ActionResponse, ApiError>;

    /// `DELETE /api/accounts`
    async fn remove_account(&self, email: &str) -> Result<ActionResponse, ApiError>;

    /// `POST /api/login/{email}`
    async fn login_account(&self, email: &str) -> Result<ActionResponse, ApiError>;

    /// `POST /api/confirm-login/{email}`
    async fn confirm_login(&self, email: &str) -> Result<ActionResponse, ApiError>;

    /// `GET /api/urls`
    async fn get_urls(&self) -> Result<Vec<UrlEntry>, ApiError>;

    /// `POST /api/urls`
    async fn add_urls(&self, urls: Vec<String>) -> Result<ActionResponse, ApiError>;

    /// `DELETE /api/urls`
    async fn remove_url(&self, url: &str) -> Result<ActionResponse, ApiError>;

    /// `POST /api/start`
    async fn start_bot(&self) -> Result<ActionResponse, ApiError>;

    /// `POST /api/stop`
    async fn stop_bot(&self) -> Result<ActionResponse, ApiError>;
}
