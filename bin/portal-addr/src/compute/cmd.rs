use std::path::PathBuf;

use alloy_primitives::B256;
use clap::Parser;
use portal_address::{parse_salt, AccountId, AddressDeriver, DerivedAddress, FixedNonce, NonceLookup};
use tracing::info;

use super::Result;
use crate::common::{decode_hex, load_hex, RpcArgs};

/// Compute the address a contract deployment will produce
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Deployer account, as a `0x`-prefixed account identifier or an SS58 address
    #[arg(value_name = "ACCOUNT")]
    pub account: AccountId,

    /// Contract bytecode as hex string (positional argument)
    #[arg(value_name = "CODE")]
    pub code: Option<String>,

    /// File containing contract bytecode. If '-' is specified, code is read from stdin
    #[arg(long = "codefile")]
    pub codefile: Option<PathBuf>,

    /// ABI-encoded constructor arguments (hex string)
    #[arg(long = "input", visible_aliases = ["data"])]
    pub input: Option<String>,

    /// File containing ABI-encoded constructor arguments
    #[arg(long = "inputfile")]
    pub inputfile: Option<PathBuf>,

    /// 32-byte salt. When given, the address follows CREATE2, even for an all-zero salt
    #[arg(long = "salt")]
    pub salt: Option<String>,

    /// Use this nonce instead of asking the RPC endpoint (CREATE only)
    #[arg(long = "nonce", conflicts_with = "salt")]
    pub nonce: Option<u64>,

    /// RPC configuration
    #[command(flatten)]
    pub rpc_args: RpcArgs,
}

impl Cmd {
    /// Execute the compute command
    pub async fn run(&self) -> Result<()> {
        let derived = self.derive().await?;
        println!("{derived}");
        Ok(())
    }

    /// Derives the contract address, taking the nonce from `--nonce` or else from the node.
    pub async fn derive(&self) -> Result<DerivedAddress> {
        match self.nonce {
            Some(nonce) => self.derive_with(FixedNonce::new(nonce)).await,
            None => self.derive_with(self.rpc_args.nonce_lookup()?).await,
        }
    }

    /// Loads the inputs and derives the contract address, asking `lookup` for the nonce when
    /// no salt was given.
    pub async fn derive_with<L: NonceLookup>(&self, lookup: L) -> Result<DerivedAddress> {
        let code = load_hex(self.code.as_deref(), self.codefile.as_deref())?;
        let input = load_hex(self.input.as_deref(), self.inputfile.as_deref())?;
        let salt = self.salt()?;

        info!(
            account = %self.account,
            code_len = code.len(),
            input_len = input.len(),
            salted = salt.is_some(),
            "computing contract address"
        );

        Ok(AddressDeriver::new(lookup).derive(&self.account, &code, &input, salt).await)
    }

    /// Parses the salt, if one was given.
    fn salt(&self) -> Result<Option<B256>> {
        let Some(salt) = self.salt.as_deref() else {
            return Ok(None);
        };
        Ok(Some(parse_salt(&decode_hex(salt)?)?))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use alloy_primitives::address;
    use portal_address::{create1, create2, test_utils::CountingNonceLookup, AddressError};

    use super::*;
    use crate::common::PortalError;

    const ETH_DERIVED: &str = "0x6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0eeeeeeeeeeeeeeeeeeeeeeee";

    fn parse(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(std::iter::once("compute").chain(args.iter().copied())).unwrap()
    }

    #[tokio::test]
    async fn test_fixed_nonce() {
        let cmd = parse(&[ETH_DERIVED, "0x6080", "--nonce", "0"]);
        assert_eq!(
            cmd.derive().await.unwrap(),
            DerivedAddress::Known(address!("cd234a471b72ba2f1ccf0a70fcaba648a5eecd8d"))
        );
    }

    #[tokio::test]
    async fn test_zero_salt_uses_create2_without_lookup() {
        let zero = format!("0x{}", "00".repeat(32));
        let cmd = parse(&[ETH_DERIVED, "0x6080", "--input", "0x2a", "--salt", &zero]);
        let lookup = CountingNonceLookup::new(Some(5));
        let deployer = address!("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0");

        assert_eq!(
            cmd.derive_with(&lookup).await.unwrap(),
            DerivedAddress::Known(create2(deployer, B256::ZERO, &[0x60, 0x80], &[0x2a]))
        );
        assert_eq!(lookup.calls(), 0);
    }

    #[tokio::test]
    async fn test_unsalted_asks_lookup_for_deployer() {
        let cmd = parse(&[ETH_DERIVED, "0x6080"]);
        let lookup = CountingNonceLookup::new(Some(2));
        let deployer = address!("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0");

        assert_eq!(
            cmd.derive_with(&lookup).await.unwrap(),
            DerivedAddress::Known(create1(deployer, 2))
        );
        assert_eq!(lookup.queried(), [cmd.account]);
    }

    #[tokio::test]
    async fn test_rejects_short_salt() {
        let cmd = parse(&[ETH_DERIVED, "--salt", "0x01"]);
        let lookup = CountingNonceLookup::new(Some(0));
        assert!(matches!(
            cmd.derive_with(&lookup).await,
            Err(PortalError::Address(AddressError::MalformedInput { field: "salt", .. }))
        ));
        assert_eq!(lookup.calls(), 0);
    }

    #[tokio::test]
    async fn test_reads_code_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0x6080").unwrap();
        let path = file.path().to_string_lossy().into_owned();
        let zero = format!("0x{}", "00".repeat(32));
        let cmd = parse(&[ETH_DERIVED, "--codefile", path.as_str(), "--salt", &zero]);
        let deployer = address!("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0");

        assert_eq!(
            cmd.derive_with(FixedNonce::unavailable()).await.unwrap(),
            DerivedAddress::Known(create2(deployer, B256::ZERO, &[0x60, 0x80], &[]))
        );
    }

    #[test]
    fn test_nonce_conflicts_with_salt() {
        let salt = format!("0x{}", "00".repeat(32));
        let result =
            Cmd::try_parse_from(["compute", ETH_DERIVED, "--nonce", "1", "--salt", salt.as_str()]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_malformed_account() {
        let too_long = format!("0x{}", "11".repeat(33));
        assert!(Cmd::try_parse_from(["compute", too_long.as_str()]).is_err());
    }
}
