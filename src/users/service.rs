use super::{FetchError, User};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};
use url::Url;

/// Source of the current user collection.
///
/// The request handler depends only on this trait, so tests can swap the
/// HTTP-backed implementation for an in-memory one.
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Return every user known upstream, in upstream order.
    ///
    /// An empty list is a normal outcome.
    ///
    /// # Errors
    /// Returns [`FetchError`] when upstream cannot be reached, answers with a
    /// status other than `2xx` or `404`, or sends an undecodable body.
    async fn fetch_all(&self) -> Result<Vec<User>, FetchError>;
}

/// Fetches users with a single `GET` to a fixed upstream URL.
#[derive(Clone, Debug)]
pub struct HttpUsersService {
    client: Client,
    endpoint: Url,
}

impl HttpUsersService {
    #[must_use]
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UsersService for HttpUsersService {
    #[instrument(name = "users.fetch_all", skip(self), fields(http.url = %self.endpoint))]
    async fn fetch_all(&self) -> Result<Vec<User>, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();

        debug!("upstream status: {}", status);

        // 404 means upstream has no users
        if status == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: self.endpoint.to_string(),
            });
        }

        let users: Vec<User> = response.json().await.map_err(FetchError::Decode)?;

        debug!("decoded {} users", users.len());

        Ok(users)
    }
}
