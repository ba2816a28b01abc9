pub mod api;
pub mod logging;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const CMD_BEGIN: &str = "begin";
pub const CMD_VERIFY: &str = "verify";

pub const ARG_USER: &str = "user";
pub const ARG_PHONE: &str = "phone";
pub const ARG_REMOTE_HOST: &str = "remote-host";
pub const ARG_CODE: &str = "code";
pub const ARG_STATE: &str = "state";

fn user_arg() -> Arg {
    Arg::new(ARG_USER)
        .short('u')
        .long(ARG_USER)
        .help("User name that passed the first factor")
        .required(true)
}

fn begin() -> Command {
    Command::new(CMD_BEGIN)
        .about("Start the second factor after a successful first factor")
        .arg(user_arg())
        .arg(
            Arg::new(ARG_PHONE)
                .short('p')
                .long(ARG_PHONE)
                .help("Phone number used for OTP delivery"),
        )
        .arg(
            Arg::new(ARG_REMOTE_HOST)
                .long(ARG_REMOTE_HOST)
                .help("Address of the connecting client, enables the bypass window"),
        )
}

fn verify() -> Command {
    Command::new(CMD_VERIFY)
        .about("Confirm a pending challenge with the code entered by the user")
        .arg(user_arg())
        .arg(
            Arg::new(ARG_CODE)
                .short('c')
                .long(ARG_CODE)
                .help("One-time code")
                .required(true),
        )
        .arg(
            Arg::new(ARG_STATE)
                .short('s')
                .long(ARG_STATE)
                .help("State returned by a previous challenge")
                .required(true),
        )
}

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

    let command = Command::new("radius-mfa")
        .about("Second factor for RADIUS authentication")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(begin())
        .subcommand(verify());

    let command = api::with_args(command);
    logging::with_args(command)
}
