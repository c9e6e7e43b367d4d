//! Library side of the `portal-addr` CLI: predicts the address a contract deployment will
//! produce and inspects account mappings.

mod cmd;
pub use cmd::*;

/// Shared argument groups, input loading, logging and the RPC nonce lookup
pub mod common;

pub mod compute;

pub mod account;
