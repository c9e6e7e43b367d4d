//! `portal-addr` CLI tool for predicting contract deployment addresses.
//!
//! This tool computes the address a contract will be deployed at by a native 32-byte account,
//! following `CREATE` or `CREATE2` semantics of the target runtime.

use clap::Parser;
use portal_addr::{Cli, Error};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    Cli::parse().run().await.inspect_err(|e| eprintln!("{e:?}"))
}
