//! Reading the byte inputs of a deployment.

use std::{fs, io, path::Path};

use alloy_primitives::{hex, Bytes};

use super::Result;

/// Decodes hex with or without a `0x` prefix. Surrounding whitespace is ignored and an empty
/// string decodes to no bytes.
pub fn decode_hex(s: &str) -> Result<Bytes> {
    Ok(hex::decode(s.trim())?.into())
}

/// Reads hex bytes given inline or through a file, where `-` names stdin. The inline value wins
/// over the file, and no input at all is empty.
pub fn load_hex(inline: Option<&str>, file: Option<&Path>) -> Result<Bytes> {
    match (inline, file) {
        (Some(inline), _) => decode_hex(inline),
        (None, Some(path)) if path == Path::new("-") => {
            decode_hex(&io::read_to_string(io::stdin())?)
        }
        (None, Some(path)) => decode_hex(&fs::read_to_string(path)?),
        (None, None) => Ok(Bytes::new()),
    }
}
