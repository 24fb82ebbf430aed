//! Bot API Client
//!
//! A reqwest client for the bot control backend's JSON API.

use crate::api::BotApi;
use crate::api::error::ApiError;
use crate::models::{
    Account, AccountKeyBody, ActionResponse, AddUrlsBody, NewAccountBody, StatusSnapshot,
    UrlEntry, UrlKeyBody,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, ClientBuilder, Method, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("bot-dashboard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BotApiClient {
    client: Client,
    base_url: String,
}

impl BotApiClient {
    /// Requests carry no timeout: an outstanding call is only abandoned with the process.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self.client.get(&url).send().await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&response_bytes)?)
    }

    /// Action endpoints report failures in the body, usually with a 4xx/5xx
    /// status, so the body is decoded before the status is looked at.
    async fn decode_action_response(response: Response) -> Result<ActionResponse, ApiError> {
        let status = response.status();
        let response_bytes = response.bytes().await?;
        match serde_json::from_slice::<ActionResponse>(&response_bytes) {
            Ok(body) => Ok(body),
            Err(_) if !status.is_success() => Err(ApiError::Http {
                status: status.as_u16(),
                message: String::from_utf8_lossy(&response_bytes).into_owned(),
            }),
            Err(e) => Err(ApiError::Decode(e)),
        }
    }

    async fn action_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
    ) -> Result<ActionResponse, ApiError> {
        let url = self.build_url(endpoint);
        let response = self.client.request(method, &url).json(body).send().await?;

        Self::decode_action_response(response).await
    }

    async fn post_request_no_body(&self, endpoint: &str) -> Result<ActionResponse, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        Self::decode_action_response(response).await
    }
}

#[async_trait::async_trait]
impl BotApi for BotApiClient {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }

    async fn get_status(&self) -> Result<StatusSnapshot, ApiError> {
        self.get_request("api/status").await
    }

    async fn get_accounts(&self) -> Result<Vec<Account>, ApiError> {
        self.get_request("api/accounts").await
    }

    async fn add_account(&self, email: &str, proxy: &str) -> Result<ActionResponse, ApiError> {
        let body = NewAccountBody { email, proxy };
        self.action_request(Method::POST, "api/accounts", &body)
            .await
    }

    async fn remove_account(&self, email: &str) -> Result<ActionResponse, ApiError> {
        let body = AccountKeyBody { email };
        self.action_request(Method::DELETE, "api/accounts", &body)
            .await
    }

    async fn login_account(&self, email: &str) -> Result<ActionResponse, ApiError> {
        let endpoint = format!("api/login/{}", urlencoding::encode(email));
        self.post_request_no_body(&endpoint).await
    }

    async fn confirm_login(&self, email: &str) -> Result<ActionResponse, ApiError> {
        let endpoint = format!("api/confirm-login/{}", urlencoding::encode(email));
        self.post_request_no_body(&endpoint).await
    }

    async fn get_urls(&self) -> Result<Vec<UrlEntry>, ApiError> {
        self.get_request("api/urls").await
    }

    async fn add_urls(&self, urls: Vec<String>) -> Result<ActionResponse, ApiError> {
        let body = AddUrlsBody { urls: &urls };
        self.action_request(Method::POST, "api/urls", &body).await
    }

    async fn remove_url(&self, url: &str) -> Result<ActionResponse, ApiError> {
        let body = UrlKeyBody { url };
        self.action_request(Method::DELETE, "api/urls", &body).await
    }

    async fn start_bot(&self) -> Result<ActionResponse, ApiError> {
        self.post_request_no_body("api/start").await
    }

    async fn stop_bot(&self) -> Result<ActionResponse, ApiError> {
        self.post_request_no_body("api/stop").await
    }
}
