//! Signed transfer transactions
//!
//! A transaction moves `amount` from the holder of `source` to `recipient`.
//! The source signs the canonical message `source + recipient + amount`.

use crate::crypto::{get_public_key, sign, KeyError};
use serde::{Deserialize, Serialize};

/// A signed transfer between two public keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sender's public key (hex, compressed)
    pub source: String,
    /// Recipient's public key (hex, compressed)
    pub recipient: String,
    /// Amount transferred; negative amounts never validate
    pub amount: i64,
    /// Signature by `source` over [`Transaction::signing_message`]
    pub signature: String,
}

impl Transaction {
    /// Create a transaction signed by `private_key`
    pub fn new(private_key: &str, recipient: &str, amount: i64) -> Result<Self, KeyError> {
        let source = get_public_key(private_key)?;
        let message = signing_message(&source, recipient, amount);
        let signature = sign(private_key, message)?;

        Ok(Self {
            source,
            recipient: recipient.to_string(),
            amount,
            signature,
        })
    }

    /// The exact message the source signs
    pub fn signing_message(&self) -> String {
        signing_message(&self.source, &self.recipient, self.amount)
    }
}

fn signing_message(source: &str, recipient: &str, amount: i64) -> String {
    format!("{}{}{}", source, recipient, amount)
}
