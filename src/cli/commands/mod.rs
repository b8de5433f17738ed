pub mod logging;
pub mod upstream;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_PORT: &str = "port";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("customers")
        .about("Customer management users gateway")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("CUSTOMERS_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = upstream::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::commands::{logging::ARG_VERBOSITY, upstream::ARG_USERS_ENDPOINT};

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "customers");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Customer management users gateway".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_port_and_endpoint() {
        temp_env::with_vars(
            [
                ("CUSTOMERS_PORT", None::<&str>),
                ("CUSTOMERS_USERS_ENDPOINT", None::<&str>),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec![
                    "customers",
                    "--port",
                    "9090",
                    "--users-endpoint",
                    "https://example.com/users",
                ]);

                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(9090));
                assert_eq!(
                    matches.get_one::<String>(ARG_USERS_ENDPOINT).cloned(),
                    Some("https://example.com/users".to_string())
                );
            },
        );
    }

    #[test]
    fn test_default_port() {
        temp_env::with_vars([("CUSTOMERS_PORT", None::<&str>)], || {
            let command = new();
            let matches =
                command.get_matches_from(vec!["customers", "-e", "https://example.com/users"]);

            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8080));
        });
    }

    #[test]
    fn test_missing_endpoint_is_an_error() {
        temp_env::with_vars([("CUSTOMERS_USERS_ENDPOINT", None::<&str>)], || {
            let command = new();
            let result = command.try_get_matches_from(vec!["customers"]);

            assert!(result.is_err());
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("CUSTOMERS_PORT", Some("443")),
                ("CUSTOMERS_USERS_ENDPOINT", Some("https://example.com/users")),
                ("CUSTOMERS_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["customers"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>(ARG_USERS_ENDPOINT).cloned(),
                    Some("https://example.com/users".to_string())
                );
                assert_eq!(matches.get_one::<u8>(ARG_VERBOSITY).copied(), Some(2));
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, level) in levels.into_iter().enumerate() {
            temp_env::with_vars(
                [
                    ("CUSTOMERS_LOG_LEVEL", Some(level)),
                    ("CUSTOMERS_USERS_ENDPOINT", Some("https://example.com/users")),
                ],
                || {
                    let command = new();
                    let matches = command.get_matches_from(vec!["customers"]);
                    assert_eq!(
                        matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                        Some(u8::try_from(index).unwrap())
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5_usize {
            temp_env::with_vars(
                [
                    ("CUSTOMERS_LOG_LEVEL", None::<&str>),
                    ("CUSTOMERS_USERS_ENDPOINT", None::<&str>),
                ],
                || {
                    let mut args = vec![
                        "customers".to_string(),
                        "--users-endpoint".to_string(),
                        "https://example.com/users".to_string(),
                    ];

                    // Add the appropriate number of "-v" flags based on the index
                    if index > 0 {
                        args.push(format!("-{}", "v".repeat(index)));
                    }

                    let matches = new().get_matches_from(args);

                    assert_eq!(
                        matches.get_one::<u8>(ARG_VERBOSITY).copied(),
                        Some(u8::try_from(index).unwrap())
                    );
                },
            );
        }
    }
}
