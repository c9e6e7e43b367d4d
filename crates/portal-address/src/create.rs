//! The `CREATE` and `CREATE2` address derivation schemes.

use alloy_primitives::{keccak256, Address, B256};
use alloy_rlp::{Encodable, Header};

use crate::{
    constants::{
        CREATE2_PREFIX, CREATE2_PREIMAGE_LENGTH, ETH_ADDRESS_LENGTH, HASH_LENGTH, SALT_LENGTH,
    },
    AddressError, Result,
};

/// Computes the address of a contract created with `CREATE`.
///
/// The address is `keccak256(rlp([deployer, nonce]))[12:]`. The nonce is RLP encoded as a
/// minimal big-endian integer, so a zero nonce becomes the empty string (`0x80`).
pub fn create1(deployer: Address, nonce: u64) -> Address {
    let deployer = deployer.as_slice();
    let payload_length = deployer.length() + nonce.length();

    let mut out = Vec::with_capacity(payload_length + 1);
    Header { list: true, payload_length }.encode(&mut out);
    deployer.encode(&mut out);
    nonce.encode(&mut out);

    Address::from_word(keccak256(&out))
}

/// Computes the address of a contract created with `CREATE2` from its code and constructor
/// arguments. The init code is `code ++ data`.
pub fn create2(deployer: Address, salt: B256, code: &[u8], data: &[u8]) -> Address {
    let mut init_code = Vec::with_capacity(code.len() + data.len());
    init_code.extend_from_slice(code);
    init_code.extend_from_slice(data);
    create2_from_hash(deployer, salt, keccak256(&init_code))
}

/// Computes the address of a contract created with `CREATE2` from the hash of its init code.
///
/// The address is `keccak256(0xff ++ deployer ++ salt ++ init_code_hash)[12:]`.
pub fn create2_from_hash(deployer: Address, salt: B256, init_code_hash: B256) -> Address {
    const SALT_OFFSET: usize = 1 + ETH_ADDRESS_LENGTH;
    const HASH_OFFSET: usize = SALT_OFFSET + SALT_LENGTH;

    let mut preimage = [0u8; CREATE2_PREIMAGE_LENGTH];
    preimage[0] = CREATE2_PREFIX;
    preimage[1..SALT_OFFSET].copy_from_slice(deployer.as_slice());
    preimage[SALT_OFFSET..HASH_OFFSET].copy_from_slice(salt.as_slice());
    preimage[HASH_OFFSET..HASH_OFFSET + HASH_LENGTH].copy_from_slice(init_code_hash.as_slice());
    Address::from_word(keccak256(preimage))
}

/// Like [`create2`], but takes the deployer and the salt as raw bytes and rejects them with
/// [`AddressError::MalformedInput`] unless they are exactly 20 and 32 bytes long.
pub fn create2_checked(deployer: &[u8], salt: &[u8], code: &[u8], data: &[u8]) -> Result<Address> {
    let deployer = parse_deployer(deployer)?;
    let salt = parse_salt(salt)?;
    Ok(create2(deployer, salt, code, data))
}

/// Validates a raw deployer address.
pub fn parse_deployer(bytes: &[u8]) -> Result<Address> {
    if bytes.len() != ETH_ADDRESS_LENGTH {
        return Err(AddressError::MalformedInput {
            field: "deployer address",
            expected: ETH_ADDRESS_LENGTH,
            actual: bytes.len(),
        });
    }
    Ok(Address::from_slice(bytes))
}

/// Validates a raw `CREATE2` salt.
pub fn parse_salt(bytes: &[u8]) -> Result<B256> {
    if bytes.len() != SALT_LENGTH {
        return Err(AddressError::MalformedInput {
            field: "salt",
            expected: SALT_LENGTH,
            actual: bytes.len(),
        });
    }
    Ok(B256::from_slice(bytes))
}
