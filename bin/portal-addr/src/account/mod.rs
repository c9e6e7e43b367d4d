//! Inspect the mapping between native accounts and 20-byte addresses.

mod cmd;
pub use cmd::*;

pub use crate::common::Result;
