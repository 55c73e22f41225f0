//! HTTP API Client
//!
//! Thin typed wrapper over the JSON API. Error bodies follow RFC 7807
//! problem details; the human-readable `detail` field becomes the
//! error message shown to the user.

use kernel::role::Role;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};
use crate::models::{NewNotice, NewUser, NoticeQuery, NoticeView, StoredSession, UserView};

/// API client holding the base URL and the current bearer token
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attach a bearer token to all subsequent requests
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the bearer token (logout)
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .http
            .request(method, format!("{}{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Turn a non-success response into an [`ClientError::Api`]
    async fn check(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("detail")
                .or_else(|| body.get("message"))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| default_message(status)),
            Err(_) => default_message(status),
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        Ok(Self::check(response).await?.json::<T>().await?)
    }

    // ========================================================================
    // Auth
    // ========================================================================

    /// POST /auth/login
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<StoredSession> {
        let response = self
            .request(Method::POST, "/auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        Self::json(response).await
    }

    // ========================================================================
    // Users (admin only)
    // ========================================================================

    /// GET /users
    pub async fn list_users(&self) -> ClientResult<Vec<UserView>> {
        let response = self.request(Method::GET, "/users").send().await?;
        Self::json(response).await
    }

    /// POST /users
    pub async fn create_user(&self, user: &NewUser) -> ClientResult<UserView> {
        let response = self
            .request(Method::POST, "/users")
            .json(user)
            .send()
            .await?;
        Self::json(response).await
    }

    /// PUT /users/{id}/role
    pub async fn update_user_role(&self, id: Uuid, role: Role) -> ClientResult<UserView> {
        let response = self
            .request(Method::PUT, &format!("/users/{id}/role"))
            .json(&serde_json::json!({ "role": role }))
            .send()
            .await?;
        Self::json(response).await
    }

    /// DELETE /users/{id}
    pub async fn delete_user(&self, id: Uuid) -> ClientResult<()> {
        let response = self
            .request(Method::DELETE, &format!("/users/{id}"))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    // ========================================================================
    // Notices
    // ========================================================================

    /// GET /notices
    pub async fn list_notices(&self, query: &NoticeQuery) -> ClientResult<Vec<NoticeView>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(start) = query.start_date {
            params.push(("startDate", start.to_string()));
        }
        if let Some(end) = query.end_date {
            params.push(("endDate", end.to_string()));
        }
        if query.important_only {
            params.push(("importantOnly", "true".to_string()));
        }

        let response = self
            .request(Method::GET, "/notices")
            .query(&params)
            .send()
            .await?;
        Self::json(response).await
    }

    /// POST /notices
    pub async fn post_notice(&self, notice: &NewNotice) -> ClientResult<NoticeView> {
        let response = self
            .request(Method::POST, "/notices")
            .json(notice)
            .send()
            .await?;
        Self::json(response).await
    }

    /// DELETE /notices/{id}
    pub async fn delete_notice(&self, id: Uuid) -> ClientResult<()> {
        let response = self
            .request(Method::DELETE, &format!("/notices/{id}"))
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

fn default_message(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Request failed")
        .to_string()
}
