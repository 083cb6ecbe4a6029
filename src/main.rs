#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! mpags-cipher — transliterate text into uppercase letters and spelled-out digits.

mod cli;
mod commands;
mod errors;
mod logging;
mod transliterate;

use std::io;

use log::debug;

use cli::{parse_args, write_error};
use commands::{Action, Streams};
use errors::CipherError;

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    debug!("arguments: {args:?}");

    let mut streams = Streams {
        input: io::stdin().lock(),
        output: io::stdout().lock(),
        diagnostics: io::stderr().lock(),
    };

    let result = parse_args(&args)
        .inspect(|options| debug!("parsed options: {options:?}"))
        .map_err(CipherError::from)
        .and_then(|options| commands::dispatch(Action::from(options), &mut streams));

    if let Err(err) = result {
        write_error(&mut streams.diagnostics, &err);
        std::process::exit(err.exit_code());
    }
}
