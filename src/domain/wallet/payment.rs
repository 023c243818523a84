use std::fmt;

use secrecy::SecretString;
use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Drops in one XRP.
pub const DROPS_PER_XRP: u64 = 1_000_000;

/// Largest amount whose drop count fits in a u64.
const MAX_XRP: u64 = u64::MAX / DROPS_PER_XRP;

/// A positive, whole number of XRP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct XrpAmount(u64);

impl XrpAmount {
    pub fn new(xrp: i64) -> Result<Self, ValidationError> {
        if xrp <= 0 || xrp as u64 > MAX_XRP {
            return Err(ValidationError::out_of_range(
                "amount",
                1,
                MAX_XRP as i64,
                xrp,
            ));
        }
        Ok(Self(xrp as u64))
    }

    pub fn xrp(&self) -> u64 {
        self.0
    }

    /// The amount in drops, as the ledger expects it.
    pub fn drops(&self) -> u64 {
        // Bounded in `new`.
        self.0 * DROPS_PER_XRP
    }
}

impl fmt::Display for XrpAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} XRP", self.0)
    }
}

/// A payment to submit: from the wallet behind `seed` to `destination`.
#[derive(Debug, Clone)]
pub struct PaymentRequest {
    pub seed: SecretString,
    pub amount: XrpAmount,
    pub destination: String,
}

impl PaymentRequest {
    pub fn new(
        seed: SecretString,
        amount: XrpAmount,
        destination: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let destination = destination.into().trim().to_string();
        if destination.is_empty() {
            return Err(ValidationError::empty_field("destination"));
        }
        if !destination.starts_with('r') {
            return Err(ValidationError::invalid_format(
                "destination",
                "classic addresses start with 'r'",
            ));
        }
        Ok(Self {
            seed,
            amount,
            destination,
        })
    }
}

/// A payment the ledger has validated with `tesSUCCESS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentOutcome {
    pub hash: String,
    pub result: String,
    pub ledger_index: Option<u64>,
    pub validated: bool,
}
