//! Predict the address of a contract deployment.

mod cmd;
pub use cmd::*;

pub use crate::common::Result;
