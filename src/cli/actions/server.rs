use crate::{
    APP_USER_AGENT,
    api::{self, handlers::SharedUsersService},
    users::HttpUsersService,
};
use anyhow::{Context, Result};
use reqwest::Client;
use std::sync::Arc;
use tracing::info;
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub users_endpoint: Url,
}

/// Build the upstream users service for `endpoint`.
///
/// # Errors
/// Returns an error if the HTTP client cannot be built.
pub fn users_service(endpoint: Url) -> Result<SharedUsersService> {
    let client = Client::builder()
        .user_agent(APP_USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    Ok(Arc::new(HttpUsersService::new(client, endpoint)))
}

/// Execute the server action.
/// # Errors
/// Returns an error if the HTTP client cannot be built or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    info!("Users endpoint: {}", args.users_endpoint);

    let service = users_service(args.users_endpoint)?;

    api::new(args.port, service).await
}
