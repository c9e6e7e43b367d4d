//! Contract address derivation for chains whose native accounts are 32 bytes wide while the
//! execution environment addresses contracts with 20-byte Ethereum-style addresses.
//!
//! The derivation has to agree with the runtime bit for bit: the deployer's native account is
//! mapped into the 20-byte space (see [`AccountId::to_eth_address`]) and the contract address is
//! then computed with `CREATE` ([`create1`]) or `CREATE2` ([`create2`]). [`AddressDeriver`] ties
//! the pieces together and selects the scheme from the presence of a salt.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod constants;

mod account;
pub use account::*;

mod create;
pub use create::*;

mod deriver;
pub use deriver::*;

mod error;
pub use error::*;

mod nonce;
pub use nonce::*;

pub mod ss58;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use alloy_primitives::{Address, B256};
