//! HTTP/JSON implementation of [`RemoteApi`].

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::time::timeout;

use crate::config::ApiConfig;
use crate::model::{
    CourseDetails, Domain, Note, NoteDraft, NoteId, ProfileUpdate, Secret, Session, UserProfile,
};

use super::error::{extract_message, ApiError};
use super::{Credentials, Registration, RemoteApi};

#[derive(Deserialize)]
struct RefreshResponse {
    token: Secret,
}

pub struct HttpApi {
    client: Client,
    base_url: String,
    request_timeout: Duration,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(builder: RequestBuilder, token: Option<&Secret>) -> RequestBuilder {
        match token {
            Some(token) => builder.bearer_auth(token.expose()),
            None => builder,
        }
    }

    /// Send and decode a JSON response body.
    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        self.within(async {
            let response = self.send(builder).await?;
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        })
        .await
    }

    /// Send a request whose response body is ignored.
    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.within(async { self.send(builder).await.map(|_| ()) }).await
    }

    /// Enforce the total request timeout, reading the body included.
    async fn within<T>(
        &self,
        request: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        match timeout(self.request_timeout, request).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    /// Send and map non-2xx statuses.
    async fn send(&self, builder: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = builder.send().await.map_err(ApiError::Connection)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_message(&body);
        tracing::debug!(status = status.as_u16(), message = ?message, "remote call failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl RemoteApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<Session, ApiError> {
        let builder = self.client.post(self.url("/auth/login")).json(credentials);
        self.send_json(builder).await
    }

    async fn signup(&self, registration: &Registration) -> Result<Session, ApiError> {
        let builder = self.client.post(self.url("/auth/signup")).json(registration);
        self.send_json(builder).await
    }

    async fn refresh(&self, token: &Secret) -> Result<Secret, ApiError> {
        let builder = Self::authorized(self.client.post(self.url("/auth/refresh")), Some(token));
        let response: RefreshResponse = self.send_json(builder).await?;
        Ok(response.token)
    }

    async fn fetch_profile(&self, token: &Secret) -> Result<UserProfile, ApiError> {
        let builder = Self::authorized(self.client.get(self.url("/users/me")), Some(token));
        self.send_json(builder).await
    }

    async fn update_profile(
        &self,
        token: &Secret,
        update: &ProfileUpdate,
    ) -> Result<UserProfile, ApiError> {
        let builder =
            Self::authorized(self.client.put(self.url("/users/me")), Some(token)).json(update);
        self.send_json(builder).await
    }

    async fn fetch_domains(&self, token: Option<&Secret>) -> Result<Vec<Domain>, ApiError> {
        let builder = Self::authorized(self.client.get(self.url("/domains")), token);
        self.send_json(builder).await
    }

    async fn fetch_course_details(
        &self,
        token: Option<&Secret>,
        course_id: u64,
    ) -> Result<CourseDetails, ApiError> {
        let path = format!("/courses/{}", course_id);
        let builder = Self::authorized(self.client.get(self.url(&path)), token);
        self.send_json(builder).await
    }

    async fn list_notes(&self, token: &Secret) -> Result<Vec<Note>, ApiError> {
        let builder = Self::authorized(self.client.get(self.url("/notes")), Some(token));
        self.send_json(builder).await
    }

    async fn create_note(&self, token: &Secret, draft: &NoteDraft) -> Result<Note, ApiError> {
        let builder =
            Self::authorized(self.client.post(self.url("/notes")), Some(token)).json(draft);
        self.send_json(builder).await
    }

    async fn update_note(
        &self,
        token: &Secret,
        id: NoteId,
        draft: &NoteDraft,
    ) -> Result<Note, ApiError> {
        let path = format!("/notes/{}", id);
        let builder = Self::authorized(self.client.put(self.url(&path)), Some(token)).json(draft);
        self.send_json(builder).await
    }

    async fn delete_note(&self, token: &Secret, id: NoteId) -> Result<(), ApiError> {
        let path = format!("/notes/{}", id);
        let builder = Self::authorized(self.client.delete(self.url(&path)), Some(token));
        self.send_empty(builder).await
    }
}
