//! Error types for address derivation.

use alloy_primitives::hex::FromHexError;

/// Errors raised while validating or parsing derivation inputs.
///
/// Derivation itself never fails once inputs have the right shape: hashing is infallible and an
/// unknown nonce is reported as [`DerivedAddress::Undetermined`](crate::DerivedAddress), not as an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// A fixed-length field does not have the length it requires.
    #[error("malformed {field}: expected {expected} bytes, got {actual}")]
    MalformedInput {
        /// The name of the offending field
        field: &'static str,
        /// The required length (or the maximum, for account identifiers)
        expected: usize,
        /// The length that was supplied
        actual: usize,
    },

    /// Invalid hex string
    #[error("invalid hex string: {0}")]
    InvalidHex(#[from] FromHexError),

    /// Invalid base58 string
    #[error("invalid base58 string: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),

    /// The decoded SS58 payload has an unexpected length
    #[error("invalid SS58 length: {0} bytes")]
    InvalidSs58Length(usize),

    /// The SS58 prefix is reserved or out of range
    #[error("invalid SS58 prefix: {0}")]
    InvalidSs58Prefix(u16),

    /// The SS58 checksum does not match the payload
    #[error("invalid SS58 checksum")]
    InvalidSs58Checksum,
}

/// Result type for address derivation.
pub type Result<T, E = AddressError> = core::result::Result<T, E>;
