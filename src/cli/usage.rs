/// Usage surface: the clap description of every accepted flag.
///
/// Token interpretation is done by [`super::args::parse_args`], which needs
/// exact-string matching that clap's grammar does not offer (no `-ifile`, no
/// `--input=file`, no combined short flags). This `Command` is used to render
/// `--help` and as the registry of flag spellings for typo suggestions.
use clap::{Arg, ArgAction, Command};

/// Program name shown in usage output.
pub const BIN_NAME: &str = "mpags-cipher";

/// Version string printed by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the clap `Command` describing the CLI.
#[must_use]
pub fn command() -> Command {
    Command::new(BIN_NAME)
        .about("Encrypts/Decrypts input alphanumeric text using classical ciphers")
        .override_usage(format!(
            "{BIN_NAME} [-h|--help] [--version] [-i <FILE>] [-o <FILE>]"
        ))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue)
                .help("Print this help message and exit"),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .action(ArgAction::SetTrue)
                .help("Print version information"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .value_name("FILE")
                .help("Read text to be processed from FILE\nStdin will be used if not supplied"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .value_name("FILE")
                .help("Write processed text to FILE\nStdout will be used if not supplied"),
        )
}

/// Render the help text as plain (unstyled) text.
#[must_use]
pub fn help_text() -> String {
    command().render_help().to_string()
}

/// Every flag spelling the parser accepts, e.g. `-h`, `--help`, `-i`.
#[must_use]
pub fn known_flags() -> Vec<String> {
    let cmd = command();
    cmd.get_arguments()
        .flat_map(|arg| {
            let short = arg.get_short().map(|c| format!("-{c}"));
            let long = arg.get_long().map(|l| format!("--{l}"));
            short.into_iter().chain(long)
        })
        .collect()
}
