/// CLI layer: argument parsing, usage text and diagnostics.
pub mod args;
pub mod output;
pub mod suggest;
pub mod usage;

pub use args::{ParsedOptions, parse_args};
pub use output::{write_error, write_warning};
