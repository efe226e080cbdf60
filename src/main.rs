//! Ledger CLI Application
//!
//! Key generation, signing and chain validation from the command line.

use clap::{Parser, Subcommand};
use signed_ledger::cli;
use signed_ledger::core::{ChainConfig, DEFAULT_DIFFICULTY, MAX_DIFFICULTY};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "ledger")]
#[command(version = "0.1.0")]
#[command(about = "Sign transactions and check a blockchain for tampering", long_about = None)]
struct Cli {
    /// Proof-of-work difficulty (number of leading zero bits)
    #[arg(
        short,
        long,
        env = "LEDGER_DIFFICULTY",
        default_value_t = DEFAULT_DIFFICULTY,
        value_parser = clap::value_parser!(u32).range(0..=MAX_DIFFICULTY as i64)
    )]
    difficulty: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new private/public key pair
    Keygen,

    /// Print the public key for a private key
    Pubkey {
        /// Private key (64 hex characters)
        private_key: String,
    },

    /// Sign a message
    Sign {
        /// Private key (64 hex characters)
        private_key: String,

        /// Message to sign
        message: String,
    },

    /// Verify a signature
    Verify {
        /// Public key (66 hex characters)
        public_key: String,

        /// Signed message
        message: String,

        /// Signature (128 hex characters)
        signature: String,
    },

    /// Build, validate and tamper with a small demo chain
    Demo,

    /// Validate a JSON-encoded blockchain
    Validate {
        /// Input file path
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let config = ChainConfig {
        difficulty: args.difficulty,
    };

    let ok = match args.command {
        Commands::Keygen => cli::cmd_keygen().map(|_| true),
        Commands::Pubkey { private_key } => cli::cmd_pubkey(&private_key).map(|_| true),
        Commands::Sign {
            private_key,
            message,
        } => cli::cmd_sign(&private_key, &message).map(|_| true),
        Commands::Verify {
            public_key,
            message,
            signature,
        } => cli::cmd_verify(&public_key, &message, &signature),
        Commands::Demo => cli::cmd_demo(&config).map(|_| true),
        Commands::Validate { input } => cli::cmd_validate(&input, &config),
    }?;

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
