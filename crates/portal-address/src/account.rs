//! Mapping between native 32-byte account identifiers and 20-byte addresses.
//!
//! The runtime embeds a 20-byte address into its 32-byte account space by appending twelve
//! [`ETH_DERIVED_MARKER`] bytes. Every other account is derived from a public key, and its 20-byte
//! address is the tail of the keccak-256 hash of the full identifier.

use core::str::FromStr;

use alloy_primitives::{hex, keccak256, Address, B256};

use crate::{
    constants::{ACCOUNT_ID_LENGTH, ETH_ADDRESS_LENGTH, ETH_DERIVED_MARKER},
    ss58, AddressError, Result,
};

/// A native account identifier, always 32 bytes.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::Display,
    derive_more::From,
    derive_more::Deref,
)]
#[display("{_0}")]
pub struct AccountId(B256);

impl AccountId {
    /// Creates an account identifier from its raw bytes.
    pub const fn new(bytes: [u8; ACCOUNT_ID_LENGTH]) -> Self {
        Self(B256::new(bytes))
    }

    /// Creates an account identifier from at most 32 bytes, zero-padding on the right.
    ///
    /// Returns [`AddressError::MalformedInput`] if more than 32 bytes are supplied.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > ACCOUNT_ID_LENGTH {
            return Err(AddressError::MalformedInput {
                field: "account identifier",
                expected: ACCOUNT_ID_LENGTH,
                actual: bytes.len(),
            });
        }
        let mut padded = [0u8; ACCOUNT_ID_LENGTH];
        padded[..bytes.len()].copy_from_slice(bytes);
        Ok(Self::new(padded))
    }

    /// Returns the account identifier the runtime assigns to a 20-byte address: the address
    /// followed by twelve [`ETH_DERIVED_MARKER`] bytes.
    pub fn fallback(address: Address) -> Self {
        let mut bytes = [ETH_DERIVED_MARKER; ACCOUNT_ID_LENGTH];
        bytes[..ETH_ADDRESS_LENGTH].copy_from_slice(address.as_slice());
        Self::new(bytes)
    }

    /// Decodes an SS58 encoded account, accepting any network prefix.
    pub fn from_ss58(s: &str) -> Result<Self> {
        let (_, bytes) = ss58::decode(s)?;
        Ok(Self::new(bytes))
    }

    /// Encodes the account as SS58 under the given network prefix.
    pub fn to_ss58(&self, prefix: u16) -> Result<String> {
        ss58::encode(&self.0 .0, prefix)
    }

    /// Classifies the account once. All consumers should go through the returned
    /// [`MappedAccount`] instead of inspecting the marker bytes themselves.
    pub fn classify(&self) -> MappedAccount {
        let bytes = self.0.as_slice();
        if bytes[ETH_ADDRESS_LENGTH] == ETH_DERIVED_MARKER &&
            bytes[ETH_ADDRESS_LENGTH + 1] == ETH_DERIVED_MARKER
        {
            MappedAccount::NativeEth(Address::from_slice(&bytes[..ETH_ADDRESS_LENGTH]))
        } else {
            MappedAccount::CryptoDerived(self.0)
        }
    }

    /// Returns `true` if the account was originally a 20-byte address.
    pub fn is_eth_derived(&self) -> bool {
        matches!(self.classify(), MappedAccount::NativeEth(_))
    }

    /// Maps the account into the 20-byte address space of the execution environment.
    pub fn to_eth_address(&self) -> Address {
        self.classify().to_eth_address()
    }
}

impl From<[u8; ACCOUNT_ID_LENGTH]> for AccountId {
    fn from(bytes: [u8; ACCOUNT_ID_LENGTH]) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for AccountId {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl FromStr for AccountId {
    type Err = AddressError;

    /// Parses either `0x`-prefixed hex (at most 32 bytes, zero-padded) or SS58.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(hex_str) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Self::from_slice(&hex::decode(hex_str)?)
        } else {
            Self::from_ss58(s)
        }
    }
}

/// A classified account identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappedAccount {
    /// An account that was originally a 20-byte address.
    NativeEth(Address),
    /// An account derived from a public key. Holds the full 32-byte identifier.
    CryptoDerived(B256),
}

impl MappedAccount {
    /// Returns the 20-byte address of the account.
    pub fn to_eth_address(&self) -> Address {
        match self {
            Self::NativeEth(address) => *address,
            Self::CryptoDerived(account) => Address::from_word(keccak256(account)),
        }
    }
}

impl From<AccountId> for MappedAccount {
    fn from(account: AccountId) -> Self {
        account.classify()
    }
}
