//! # Customers (Users Gateway)
//!
//! `customers` exposes a single read endpoint, `GET /users`, that returns the
//! user directory held by an upstream HTTP API.
//!
//! ## Request Pipeline
//!
//! - **Fetch adapter** ([`users::HttpUsersService`]): issues one `GET` to the
//!   configured upstream URL per call. An upstream `404 Not Found` means "no
//!   users" and yields an empty list; any `2xx` body is decoded as a JSON array
//!   of users; every other outcome is a [`users::FetchError`].
//! - **Request handler** ([`api::handlers::users::list_users`]): answers
//!   `200 OK` with the users when the list is non-empty and `404 Not Found`
//!   with an empty body otherwise.
//!
//! An upstream `404` and an upstream `[]` are indistinguishable to callers:
//! both surface as `404 Not Found`.
//!
//! Adapter failures are not handled by the handler. They flow to
//! [`api::handlers::ApiError`], which logs them and answers `500`.

pub mod api;
pub mod cli;
pub mod users;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
