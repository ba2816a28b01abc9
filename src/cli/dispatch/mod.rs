//! Map validated CLI matches to an [`Action`].

use crate::cli::{
    actions::{Action, begin, verify},
    commands::{self, api},
    globals::GlobalArgs,
};
use anyhow::{Context, Result, anyhow};
use secrecy::SecretString;
use std::time::Duration;

fn required(matches: &clap::ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

fn global_args(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let mut globals = GlobalArgs::new(
        required(matches, api::ARG_API_URL)?,
        required(matches, api::ARG_NAS_IDENTIFIER)?,
        SecretString::from(required(matches, api::ARG_SHARED_SECRET)?),
    );

    if let Some(minutes) = matches.get_one::<u32>(api::ARG_BYPASS_PERIOD) {
        globals.bypass_period_minutes = *minutes;
    }
    if let Some(seconds) = matches.get_one::<u64>(api::ARG_API_TIMEOUT) {
        globals.api_timeout = Duration::from_secs(*seconds);
    }
    globals.allow_insecure_http = matches.get_flag(api::ARG_ALLOW_INSECURE_HTTP);

    Ok(globals)
}

/// # Errors
/// Returns an error if required arguments are missing or the subcommand is unknown.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let globals = global_args(matches)?;

    match matches.subcommand() {
        Some((commands::CMD_BEGIN, sub_m)) => Ok(Action::Begin(
            globals,
            begin::Args {
                user_name: required(sub_m, commands::ARG_USER)?,
                user_phone: sub_m.get_one::<String>(commands::ARG_PHONE).cloned(),
                remote_host: sub_m.get_one::<String>(commands::ARG_REMOTE_HOST).cloned(),
            },
        )),
        Some((commands::CMD_VERIFY, sub_m)) => Ok(Action::Verify(
            globals,
            verify::Args {
                user_name: required(sub_m, commands::ARG_USER)?,
                otp_code: required(sub_m, commands::ARG_CODE)?,
                state: required(sub_m, commands::ARG_STATE)?,
            },
        )),
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}
