//! Typed HTTP client for the event admin API.

use async_trait::async_trait;
use axum_helpers::ErrorResponse;
use domain_events::{CreateEvent, Event, UpdateEvent};
use domain_packages::{Category, Package};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Default API location when neither `--api-url` nor `EVENT_ADMIN_API_URL` is set
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response, message taken from the error envelope
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("Invalid API URL '{0}'")]
    InvalidUrl(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            ClientError::InvalidUrl(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Operations the console needs from the API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventApi: Send + Sync {
    async fn list_events(&self) -> ClientResult<Vec<Event>>;
    async fn get_event(&self, id: Uuid) -> ClientResult<Event>;
    async fn create_event(&self, input: &CreateEvent) -> ClientResult<Event>;
    async fn update_event(&self, id: Uuid, input: &UpdateEvent) -> ClientResult<Event>;
    async fn complete_event(&self, id: Uuid) -> ClientResult<Event>;
    async fn delete_event(&self, id: Uuid) -> ClientResult<()>;
    async fn list_packages(&self, category: Option<Category>) -> ClientResult<Vec<Package>>;
}

/// reqwest-backed [`EventApi`]
#[derive(Clone, Debug)]
pub struct EventAdminClient {
    http: Client,
    base_url: Url,
}

impl EventAdminClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = Url::parse(&format!("{trimmed}/"))
            .map_err(|_| ClientError::InvalidUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        self.base_url
            .join(path)
            .map_err(|_| ClientError::InvalidUrl(format!("{}{path}", self.base_url)))
    }

    fn event_url(&self, id: Uuid, suffix: &str) -> ClientResult<Url> {
        self.url(&format!("api/event/event/{id}{suffix}"))
    }
}

/// Turn a non-2xx response into [`ClientError::Api`].
async fn check(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|envelope| envelope.message)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        });

    debug!(status = status.as_u16(), %message, "API returned an error");
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    Ok(check(response).await?.json().await?)
}

#[async_trait]
impl EventApi for EventAdminClient {
    #[instrument(skip(self))]
    async fn list_events(&self) -> ClientResult<Vec<Event>> {
        let response = self.http.get(self.url("api/event/event")?).send().await?;
        decode(response).await
    }

    #[instrument(skip(self))]
    async fn get_event(&self, id: Uuid) -> ClientResult<Event> {
        let response = self.http.get(self.event_url(id, "")?).send().await?;
        decode(response).await
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    async fn create_event(&self, input: &CreateEvent) -> ClientResult<Event> {
        let response = self
            .http
            .post(self.url("api/event/event")?)
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    #[instrument(skip(self, input))]
    async fn update_event(&self, id: Uuid, input: &UpdateEvent) -> ClientResult<Event> {
        let response = self
            .http
            .put(self.event_url(id, "")?)
            .json(input)
            .send()
            .await?;
        decode(response).await
    }

    #[instrument(skip(self))]
    async fn complete_event(&self, id: Uuid) -> ClientResult<Event> {
        let response = self
            .http
            .patch(self.event_url(id, "/complete")?)
            .send()
            .await?;
        decode(response).await
    }

    #[instrument(skip(self))]
    async fn delete_event(&self, id: Uuid) -> ClientResult<()> {
        let response = self.http.delete(self.event_url(id, "")?).send().await?;
        check(response).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_packages(&self, category: Option<Category>) -> ClientResult<Vec<Package>> {
        let mut request = self.http.get(self.url("api/package")?);
        if let Some(category) = category {
            request = request.query(&[("category", category.to_string())]);
        }
        decode(request.send().await?).await
    }
}
