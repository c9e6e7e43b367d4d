use clap::{Parser, Subcommand};

use crate::common::LogArgs;

/// Command line interface of the portal-addr tool
#[derive(Parser, Debug)]
#[command(version, about, infer_subcommands = true)]
pub struct Cli {
    /// Logging configuration
    #[command(flatten)]
    pub log_args: LogArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: MainCmd,
}

/// Main command enumeration for the portal-addr CLI tool
#[derive(Subcommand, Debug)]
pub enum MainCmd {
    /// Compute the address a contract deployment will produce
    Compute(crate::compute::Cmd),
    /// Show the 20-byte address a native account maps to
    MapAccount(crate::account::MapCmd),
    /// Show the native account the runtime assigns to a 20-byte address
    FallbackAccount(crate::account::FallbackCmd),
}

/// Error types for the main command system
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Command error
    #[error("{0}")]
    Portal(#[from] crate::common::PortalError),
}

impl Cli {
    /// Initialize logging and execute the selected command
    pub async fn run(&self) -> Result<(), Error> {
        self.log_args.init()?;
        self.command.run().await
    }
}

impl MainCmd {
    /// Execute the main command
    pub async fn run(&self) -> Result<(), Error> {
        match self {
            Self::Compute(cmd) => cmd.run().await?,
            Self::MapAccount(cmd) => cmd.run()?,
            Self::FallbackAccount(cmd) => cmd.run()?,
        }
        Ok(())
    }
}
