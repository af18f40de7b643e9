/*
[INPUT]:  Config and command modules
[OUTPUT]: Public surface used by the swyftx binary and its tests
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod command;
pub mod config;

pub use command::{Command, run_command};
pub use config::CliConfig;

/// Printed when the binary runs without a subcommand
pub const USAGE_NOTICE: &str =
    "This library is not meant to be run directly. Please import swyftx-adapter into your program instead.";
