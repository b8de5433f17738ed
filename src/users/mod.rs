//! User records and the service that fetches them from the upstream API.

mod error;
mod service;

pub use self::error::FetchError;
pub use self::service::{HttpUsersService, UsersService};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User record as published upstream.
///
/// Fields are not validated. Missing or `null` values decode to `None` and
/// are written back as `null`; PascalCase keys are accepted alongside the
/// camelCase ones.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    #[serde(default, alias = "Id")]
    pub id: i32,
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Email")]
    pub email: Option<String>,
    #[serde(default, alias = "Address")]
    pub address: Option<Address>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, alias = "Street")]
    pub street: Option<String>,
    #[serde(default, alias = "City")]
    pub city: Option<String>,
    #[serde(default, alias = "ZipCode")]
    pub zip_code: Option<String>,
}
