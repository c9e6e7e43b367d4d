//! SS58 text encoding for 32-byte account identifiers.
//!
//! An SS58 string is the base58 encoding of `prefix ++ payload ++ checksum`, where the checksum is
//! the first two bytes of `blake2b_512("SS58PRE" ++ prefix ++ payload)`. Prefixes below 64 take one
//! byte, prefixes up to 16383 take two.

use blake2::{Blake2b512, Digest};

use crate::{constants::ACCOUNT_ID_LENGTH, AddressError, Result};

const CHECKSUM_PREIMAGE_PREFIX: &[u8] = b"SS58PRE";
const CHECKSUM_LENGTH: usize = 2;

/// The largest prefix representable in the two-byte form.
pub const MAX_PREFIX: u16 = 0x3FFF;

/// The generic substrate prefix.
pub const GENERIC_PREFIX: u16 = 42;

fn checksum(data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut hasher = Blake2b512::new();
    hasher.update(CHECKSUM_PREIMAGE_PREFIX);
    hasher.update(data);
    let hash = hasher.finalize();
    [hash[0], hash[1]]
}

/// Decodes an SS58 string into its network prefix and 32-byte account identifier.
pub fn decode(s: &str) -> Result<(u16, [u8; ACCOUNT_ID_LENGTH])> {
    let data = bs58::decode(s.trim()).into_vec()?;
    let Some(&first) = data.first() else {
        return Err(AddressError::InvalidSs58Length(0));
    };

    let (prefix, prefix_len) = match first {
        0..=63 => (first as u16, 1),
        64..=127 => {
            let Some(&second) = data.get(1) else {
                return Err(AddressError::InvalidSs58Length(data.len()));
            };
            // Lower six bits of the first byte hold bits 2..8, the second byte holds bits 0..2 in
            // its top two bits and bits 8..14 in its low six.
            let lower = (first << 2) | (second >> 6);
            let upper = second & 0b0011_1111;
            (lower as u16 | ((upper as u16) << 8), 2)
        }
        _ => return Err(AddressError::InvalidSs58Prefix(first as u16)),
    };

    if data.len() != prefix_len + ACCOUNT_ID_LENGTH + CHECKSUM_LENGTH {
        return Err(AddressError::InvalidSs58Length(data.len()));
    }

    let (body, check) = data.split_at(prefix_len + ACCOUNT_ID_LENGTH);
    if checksum(body) != check {
        return Err(AddressError::InvalidSs58Checksum);
    }

    let mut account = [0u8; ACCOUNT_ID_LENGTH];
    account.copy_from_slice(&body[prefix_len..]);
    Ok((prefix, account))
}

/// Encodes a 32-byte account identifier as SS58 under `prefix`.
pub fn encode(account: &[u8; ACCOUNT_ID_LENGTH], prefix: u16) -> Result<String> {
    let mut data = Vec::with_capacity(2 + ACCOUNT_ID_LENGTH + CHECKSUM_LENGTH);
    match prefix {
        0..=63 => data.push(prefix as u8),
        64..=MAX_PREFIX => {
            data.push(((prefix & 0b0000_0000_1111_1100) >> 2) as u8 | 0b0100_0000);
            data.push(((prefix >> 8) as u8) | (((prefix & 0b0000_0000_0000_0011) << 6) as u8));
        }
        _ => return Err(AddressError::InvalidSs58Prefix(prefix)),
    }
    data.extend_from_slice(account);
    let check = checksum(&data);
    data.extend_from_slice(&check);
    Ok(bs58::encode(data).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::hex;

    const ALICE_SS58: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
    const ALICE: [u8; 32] = hex!("d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d");

    #[test]
    fn test_decode_generic_prefix() {
        assert_eq!(decode(ALICE_SS58), Ok((GENERIC_PREFIX, ALICE)));
    }

    #[test]
    fn test_encode_generic_prefix() {
        assert_eq!(encode(&ALICE, GENERIC_PREFIX).unwrap(), ALICE_SS58);
    }

    #[test]
    fn test_two_byte_prefixes_survive_encoding() {
        for prefix in [64, 255, 256, 1000, MAX_PREFIX] {
            let encoded = encode(&ALICE, prefix).unwrap();
            assert_eq!(decode(&encoded), Ok((prefix, ALICE)), "prefix {prefix}");
        }
    }

    #[test]
    fn test_rejects_prefix_out_of_range() {
        assert_eq!(encode(&ALICE, MAX_PREFIX + 1), Err(AddressError::InvalidSs58Prefix(0x4000)));
    }

    #[test]
    fn test_rejects_corrupted_checksum() {
        let mut data = bs58::decode(ALICE_SS58).into_vec().unwrap();
        let last = data.len() - 1;
        data[last] ^= 0x01;
        let corrupted = bs58::encode(data).into_string();
        assert_eq!(decode(&corrupted), Err(AddressError::InvalidSs58Checksum));
    }

    #[test]
    fn test_rejects_wrong_length() {
        let short = bs58::encode([42u8; 20]).into_string();
        assert_eq!(decode(&short), Err(AddressError::InvalidSs58Length(20)));
        assert_eq!(decode(""), Err(AddressError::InvalidSs58Length(0)));
    }

    #[test]
    fn test_rejects_invalid_base58() {
        // '0' is not part of the base58 alphabet.
        assert!(matches!(decode("0GrwvaEF5z"), Err(AddressError::InvalidBase58(_))));
    }
}
