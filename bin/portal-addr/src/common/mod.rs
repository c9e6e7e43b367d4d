mod error;
mod hex;
mod logging;
mod nonce;

pub use error::*;
pub use hex::*;
pub use logging::*;
pub use nonce::*;
