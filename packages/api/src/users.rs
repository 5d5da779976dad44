//! The users resource: account creation.

use reqwest::Client;

use crate::config::ApiConfig;
use crate::error::RegisterError;
use crate::models::NewUser;

/// Resource path for account creation.
pub const USERS_PATH: &str = "/users";

/// Account creation against the users API.
///
/// One call is one request; implementations must not retry. The returned future is
/// not required to be `Send`: it runs on the UI's single-threaded executor.
#[allow(async_fn_in_trait)]
pub trait UsersApi {
    async fn create_user(&self, user: &NewUser) -> Result<(), RegisterError>;
}

impl<T: UsersApi> UsersApi for &T {
    async fn create_user(&self, user: &NewUser) -> Result<(), RegisterError> {
        (**self).create_user(user).await
    }
}

/// HTTP implementation of [`UsersApi`].
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: Client,
    config: ApiConfig,
}

impl UsersClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

impl UsersApi for UsersClient {
    async fn create_user(&self, user: &NewUser) -> Result<(), RegisterError> {
        let url = self.config.endpoint(USERS_PATH);
        tracing::debug!(%url, email = %user.email, "creating user");

        let response = self
            .http
            .post(&url)
            .json(user)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Request to {} failed: {}", url, e);
                RegisterError::Network(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(email = %user.email, "user created");
            return Ok(());
        }

        // A body that cannot be read still leaves the status to report.
        let body = response.text().await.unwrap_or_default();
        let err = RegisterError::from_response(status, &body);
        tracing::warn!(status = status.as_u16(), "user creation rejected: {}", err);
        Err(err)
    }
}
