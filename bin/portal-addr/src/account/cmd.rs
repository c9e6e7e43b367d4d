use alloy_primitives::Address;
use clap::Parser;
use portal_address::{AccountId, MappedAccount};

use super::Result;

/// Show the 20-byte address a native account maps to
#[derive(Parser, Debug)]
pub struct MapCmd {
    /// Account, as a `0x`-prefixed account identifier or an SS58 address
    #[arg(value_name = "ACCOUNT")]
    pub account: AccountId,
}

impl MapCmd {
    /// Execute the map-account command
    pub fn run(&self) -> Result<()> {
        print!("{}", self.render());
        Ok(())
    }

    /// Renders the mapping as `key: value` lines.
    pub fn render(&self) -> String {
        let kind = match self.account.classify() {
            MappedAccount::NativeEth(_) => "eth-derived",
            MappedAccount::CryptoDerived(_) => "key-derived",
        };
        format!(
            "account: {}\nkind:    {kind}\naddress: {}\n",
            self.account,
            self.account.to_eth_address().to_checksum(None)
        )
    }
}

/// Show the native account the runtime assigns to a 20-byte address
#[derive(Parser, Debug)]
pub struct FallbackCmd {
    /// 20-byte address
    #[arg(value_name = "ADDRESS")]
    pub address: Address,

    /// Also print the account as SS58 under this network prefix
    #[arg(long = "ss58-prefix", num_args = 0..=1, default_missing_value = "42")]
    pub ss58_prefix: Option<u16>,
}

impl FallbackCmd {
    /// Execute the fallback-account command
    pub fn run(&self) -> Result<()> {
        print!("{}", self.render()?);
        Ok(())
    }

    /// Renders the fallback account as `key: value` lines.
    pub fn render(&self) -> Result<String> {
        let account = AccountId::fallback(self.address);
        let mut out = format!("account: {account}\n");
        if let Some(prefix) = self.ss58_prefix {
            out.push_str(&format!("ss58:    {}\n", account.to_ss58(prefix)?));
        }
        Ok(out)
    }
}
