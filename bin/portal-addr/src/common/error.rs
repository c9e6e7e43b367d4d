use alloy_primitives::hex::FromHexError;
use portal_address::AddressError;

/// Error types for the portal-addr commands
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Address derivation input error
    #[error("{0}")]
    Address(#[from] AddressError),

    /// Failed to read an input file or stdin
    #[error("Failed to read input: {0}")]
    FileRead(#[from] std::io::Error),

    /// Invalid hex string
    #[error("Invalid hex string: {0}")]
    InvalidHex(#[from] FromHexError),

    /// RPC error
    #[error("RPC error: {0}")]
    RpcError(String),
}

/// Result type for the portal-addr commands
pub type Result<T> = std::result::Result<T, PortalError>;
