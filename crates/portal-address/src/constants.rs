//! Constants shared by the account mapping and the address derivation schemes.

/// Length of a native account identifier.
pub const ACCOUNT_ID_LENGTH: usize = 32;

/// Length of an Ethereum-style address.
pub const ETH_ADDRESS_LENGTH: usize = 20;

/// Length of a `CREATE2` salt.
pub const SALT_LENGTH: usize = 32;

/// Length of a keccak-256 digest, such as the `CREATE2` init code hash.
pub const HASH_LENGTH: usize = 32;

/// The byte the runtime appends (twelve times) to a 20-byte address to form the account
/// identifier of an Ethereum-derived account.
pub const ETH_DERIVED_MARKER: u8 = 0xEE;

/// The fixed prefix of the `CREATE2` preimage, see EIP-1014.
pub const CREATE2_PREFIX: u8 = 0xFF;

/// Length of the `CREATE2` preimage: prefix, deployer, salt and init code hash.
pub const CREATE2_PREIMAGE_LENGTH: usize = 1 + ETH_ADDRESS_LENGTH + SALT_LENGTH + HASH_LENGTH;
