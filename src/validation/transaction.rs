//! Transaction validation

use super::ValidationError;
use crate::core::Transaction;
use crate::crypto::verify;
use log::debug;

/// Check a transaction's amount and signature.
///
/// The signed message is rebuilt from the transaction's own fields, so any
/// edit after signing shows up as a signature mismatch.
pub fn validate_transaction(transaction: &Transaction) -> Result<(), ValidationError> {
    if transaction.amount < 0 {
        return Err(ValidationError::NegativeAmount(transaction.amount));
    }

    let message = transaction.signing_message();
    if !verify(&transaction.source, message, &transaction.signature)? {
        return Err(ValidationError::BadSignature);
    }

    Ok(())
}

/// Whether a transaction is valid. Malformed fields count as invalid.
pub fn is_valid_transaction(transaction: &Transaction) -> bool {
    match validate_transaction(transaction) {
        Ok(()) => true,
        Err(e) => {
            debug!("Rejected transaction from {}: {}", transaction.source, e);
            false
        }
    }
}
