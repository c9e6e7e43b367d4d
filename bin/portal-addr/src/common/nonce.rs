//! Nonce lookup against a live node.

use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use clap::Args;
use portal_address::{ss58, AccountId, NonceLookup};
use tracing::{debug, warn};

use super::{PortalError, Result};

/// RPC configuration arguments
#[derive(Args, Debug, Clone)]
#[command(next_help_heading = "RPC Options")]
pub struct RpcArgs {
    /// RPC URL of the node used to look up the deployer's nonce
    #[arg(long = "rpc", env = "PORTAL_RPC_URL", default_value = "http://localhost:9944")]
    pub rpc: String,

    /// SS58 prefix the node expects account addresses in
    #[arg(
        long = "rpc.ss58-prefix",
        env = "PORTAL_SS58_PREFIX",
        default_value_t = ss58::GENERIC_PREFIX,
        value_parser = clap::value_parser!(u16).range(0..=i64::from(ss58::MAX_PREFIX)),
    )]
    pub ss58_prefix: u16,
}

impl RpcArgs {
    /// Creates a [`RpcNonceLookup`] for the configured endpoint.
    pub fn nonce_lookup(&self) -> Result<RpcNonceLookup> {
        Ok(RpcNonceLookup::connect(&self.rpc)?.with_ss58_prefix(self.ss58_prefix))
    }
}

/// A [`NonceLookup`] that asks the node for the next index of the native 32-byte account
/// (`system_accountNextIndex`), which counts transactions still in the pool.
///
/// The account is sent SS58 encoded, so the node resolves the deployer itself rather than its
/// mapped 20-byte address. Any transport or RPC failure is logged and reported as a missing
/// nonce.
#[derive(derive_more::Debug, Clone)]
pub struct RpcNonceLookup {
    #[debug(ignore)]
    provider: DynProvider,
    ss58_prefix: u16,
}

impl RpcNonceLookup {
    /// Creates a lookup for the endpoint at `url`. No request is made until the first lookup.
    pub fn connect(url: &str) -> Result<Self> {
        let url: reqwest::Url = url
            .parse()
            .map_err(|e| PortalError::RpcError(format!("Invalid RPC URL '{url}': {e}")))?;
        let provider = ProviderBuilder::new().disable_recommended_fillers().connect_http(url);
        Ok(Self { provider: provider.erased(), ss58_prefix: ss58::GENERIC_PREFIX })
    }

    /// Sets the SS58 prefix accounts are encoded with in requests.
    pub const fn with_ss58_prefix(mut self, ss58_prefix: u16) -> Self {
        self.ss58_prefix = ss58_prefix;
        self
    }
}

impl NonceLookup for RpcNonceLookup {
    async fn account_nonce(&self, account: &AccountId) -> Option<u64> {
        let encoded = match account.to_ss58(self.ss58_prefix) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(%account, %err, "cannot encode account for the node");
                return None;
            }
        };

        match self
            .provider
            .raw_request::<_, u64>("system_accountNextIndex".into(), [encoded])
            .await
        {
            Ok(nonce) => {
                debug!(%account, nonce, "fetched account nonce");
                Some(nonce)
            }
            Err(err) => {
                warn!(%account, %err, "failed to fetch account nonce");
                None
            }
        }
    }
}
