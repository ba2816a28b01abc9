use clap::{Arg, Command};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_NAS_IDENTIFIER: &str = "nas-identifier";
pub const ARG_SHARED_SECRET: &str = "shared-secret";
pub const ARG_BYPASS_PERIOD: &str = "bypass-period";
pub const ARG_API_TIMEOUT: &str = "api-timeout";
pub const ARG_ALLOW_INSECURE_HTTP: &str = "allow-insecure-http";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Base URL of the verification API, example: https://mfa.example.com/api")
                .env("RADIUS_MFA_API_URL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_NAS_IDENTIFIER)
                .long(ARG_NAS_IDENTIFIER)
                .help("NAS identifier used as the API username")
                .env("RADIUS_MFA_NAS_IDENTIFIER")
                .required(true),
        )
        .arg(
            Arg::new(ARG_SHARED_SECRET)
                .long(ARG_SHARED_SECRET)
                .help("Shared secret used as the API password")
                .env("RADIUS_MFA_SHARED_SECRET")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new(ARG_BYPASS_PERIOD)
                .long(ARG_BYPASS_PERIOD)
                .help("Minutes a successful client/user pair skips the second factor (0 disables)")
                .env("RADIUS_MFA_BYPASS_PERIOD")
                .default_value("0")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new(ARG_API_TIMEOUT)
                .long(ARG_API_TIMEOUT)
                .help("Verification API request timeout in seconds")
                .env("RADIUS_MFA_API_TIMEOUT")
                .default_value("15")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_ALLOW_INSECURE_HTTP)
                .long(ARG_ALLOW_INSECURE_HTTP)
                .help("Accept a plain http:// API URL (local testing only, sends credentials in clear text)")
                .env("RADIUS_MFA_ALLOW_INSECURE_HTTP")
                .action(clap::ArgAction::SetTrue),
        )
}
