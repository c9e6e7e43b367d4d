//! Contract address derivation for a deployment that has not happened yet.

use alloy_primitives::{Address, B256};
use tracing::{debug, trace};

use crate::{create1, create2, parse_salt, AccountId, NonceLookup, Result};

/// The outcome of a derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DerivedAddress {
    /// The address the contract will be deployed at. Displays with checksum casing.
    #[display("{}", _0.to_checksum(None))]
    Known(Address),
    /// The deployer's nonce could not be obtained, so the `CREATE` address is not known yet.
    #[display("undetermined")]
    Undetermined,
}

impl DerivedAddress {
    /// Returns the address if it is known.
    pub const fn address(&self) -> Option<Address> {
        match self {
            Self::Known(address) => Some(*address),
            Self::Undetermined => None,
        }
    }

    /// Returns `true` if the address could not be determined.
    pub const fn is_undetermined(&self) -> bool {
        matches!(self, Self::Undetermined)
    }
}

impl From<DerivedAddress> for Option<Address> {
    fn from(derived: DerivedAddress) -> Self {
        derived.address()
    }
}

/// Derives the address a contract will receive when deployed by a native account.
///
/// The presence of a salt, not its value, selects the scheme: with a salt the address follows
/// `CREATE2` and the nonce lookup is never consulted, even for an all-zero salt. Without one the
/// deployer's nonce is looked up once and the address follows `CREATE`.
#[derive(Clone, Debug, Default)]
pub struct AddressDeriver<L> {
    nonce_lookup: L,
}

impl<L: NonceLookup> AddressDeriver<L> {
    /// Creates a new deriver using `nonce_lookup` for `CREATE` derivations.
    pub const fn new(nonce_lookup: L) -> Self {
        Self { nonce_lookup }
    }

    /// Returns the nonce lookup.
    pub const fn nonce_lookup(&self) -> &L {
        &self.nonce_lookup
    }

    /// Derives the contract address for a deployment of `code` with constructor arguments
    /// `data` by `account`.
    pub async fn derive(
        &self,
        account: &AccountId,
        code: &[u8],
        data: &[u8],
        salt: Option<B256>,
    ) -> DerivedAddress {
        let deployer = account.to_eth_address();
        trace!(target: "portal_address", %account, %deployer, "resolved deployer address");

        if let Some(salt) = salt {
            let address = create2(deployer, salt, code, data);
            debug!(target: "portal_address", %deployer, %salt, %address, "derived CREATE2 address");
            return DerivedAddress::Known(address);
        }

        match self.nonce_lookup.account_nonce(account).await {
            Some(nonce) => {
                let address = create1(deployer, nonce);
                debug!(target: "portal_address", %deployer, nonce, %address, "derived CREATE address");
                DerivedAddress::Known(address)
            }
            None => {
                debug!(target: "portal_address", %account, "nonce unavailable, address undetermined");
                DerivedAddress::Undetermined
            }
        }
    }

    /// Like [`Self::derive`], but validates raw inputs first.
    ///
    /// The account identifier may be shorter than 32 bytes and is zero-padded; a salt, when
    /// present, must be exactly 32 bytes. Malformed inputs fail before the nonce lookup runs.
    pub async fn derive_raw(
        &self,
        account: &[u8],
        code: &[u8],
        data: &[u8],
        salt: Option<&[u8]>,
    ) -> Result<DerivedAddress> {
        let account = AccountId::from_slice(account)?;
        let salt = salt.map(parse_salt).transpose()?;
        Ok(self.derive(&account, code, data, salt).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils::CountingNonceLookup, AddressError, FixedNonce};
    use alloy_primitives::address;

    #[test]
    fn test_display_uses_checksum_casing() {
        let known =
            DerivedAddress::Known(address!("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"));
        assert_eq!(known.to_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
        assert_eq!(DerivedAddress::Undetermined.to_string(), "undetermined");
        assert_eq!(DerivedAddress::Undetermined.address(), None);
    }

    #[tokio::test]
    async fn test_derive_raw_rejects_malformed_salt_before_lookup() {
        let deriver = AddressDeriver::new(CountingNonceLookup::new(Some(0)));
        let result = deriver.derive_raw(&[1u8; 32], &[], &[], Some(&[0u8; 31])).await;
        assert_eq!(
            result,
            Err(AddressError::MalformedInput { field: "salt", expected: 32, actual: 31 })
        );
        assert_eq!(deriver.nonce_lookup().calls(), 0);
    }

    #[tokio::test]
    async fn test_derive_raw_rejects_long_account() {
        let deriver = AddressDeriver::new(FixedNonce::new(0));
        let result = deriver.derive_raw(&[1u8; 33], &[], &[], None).await;
        assert!(matches!(result, Err(AddressError::MalformedInput { actual: 33, .. })));
    }

    #[tokio::test]
    async fn test_derive_raw_pads_short_account() {
        let deriver = AddressDeriver::new(FixedNonce::new(3));
        let padded = AccountId::from_slice(&[7u8; 10]).unwrap();
        assert_eq!(
            deriver.derive_raw(&[7u8; 10], &[], &[], None).await,
            Ok(DerivedAddress::Known(create1(padded.to_eth_address(), 3)))
        );
    }
}
