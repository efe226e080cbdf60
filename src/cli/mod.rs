//! Command-line handlers for the `ledger` binary

pub mod commands;

pub use commands::{
    cmd_demo, cmd_keygen, cmd_pubkey, cmd_sign, cmd_validate, cmd_verify, load_chain, CliResult,
};
