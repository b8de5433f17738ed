use anyhow::{Context, Result, bail};
use clap::{Arg, ArgMatches, Command};
use url::Url;

pub const ARG_USERS_ENDPOINT: &str = "users-endpoint";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_USERS_ENDPOINT)
            .short('e')
            .long(ARG_USERS_ENDPOINT)
            .help("Absolute URL of the upstream users API, example: https://api.tld/users")
            .env("CUSTOMERS_USERS_ENDPOINT")
            .required(true),
    )
}

#[derive(Debug)]
pub struct Options {
    pub users_endpoint: Url,
}

impl Options {
    /// Resolve the upstream endpoint once from validated matches.
    ///
    /// # Errors
    /// Returns an error if the endpoint is missing, not a URL, or not `http(s)`.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let raw = matches
            .get_one::<String>(ARG_USERS_ENDPOINT)
            .context("missing required argument: --users-endpoint")?;

        Ok(Self {
            users_endpoint: parse_endpoint(raw)?,
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("invalid users endpoint, must be an absolute URL: {raw}"))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => bail!("unsupported users endpoint scheme {scheme}: {raw}"),
    }

    if url.host_str().is_none() {
        bail!("users endpoint must include a host: {raw}");
    }

    Ok(url)
}
