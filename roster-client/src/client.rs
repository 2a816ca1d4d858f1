use reqwest::{Response, StatusCode};
use roster_core::{NewUser, User, ValidationErrors};
use serde::de::DeserializeOwned;

use crate::errors::{ClientError, ClientResult};

/// HTTP client for a roster server.
#[derive(Debug, Clone)]
pub struct RosterClient {
    http: reqwest::Client,
    base_url: String,
}

impl RosterClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        let response = self.http.get(self.users_url()).send().await?;
        read_json(response).await
    }

    pub async fn create_user(&self, new_user: &NewUser) -> ClientResult<User> {
        tracing::debug!(name = %new_user.name, "Creating user");
        let response = self
            .http
            .post(self.users_url())
            .json(new_user)
            .send()
            .await?;
        read_json(response).await
    }
}

/// Builds a create request from user-typed values, refusing blank ones before
/// anything is sent. The server itself accepts empty strings.
pub fn new_user_from_input(name: String, email: String) -> ClientResult<NewUser> {
    if name.trim().is_empty() {
        return Err(ClientError::EmptyField("name"));
    }
    if email.trim().is_empty() {
        return Err(ClientError::EmptyField("email"));
    }
    Ok(NewUser::new(name, email))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await?;
    if status == StatusCode::UNPROCESSABLE_ENTITY {
        if let Ok(errors) = serde_json::from_str::<ValidationErrors>(&body) {
            return Err(ClientError::Validation(errors));
        }
    }

    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}
