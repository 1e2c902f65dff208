//! Primitive encoders for Move `vector<u8>` payload arguments.
//!
//! Every function here is pure: no I/O, no shared state. Each either returns
//! the complete byte encoding or an [`EncodeError`]; a partial byte sequence
//! is never returned.
//!
//! | Value | Layout |
//! |-------|--------|
//! | `u8` | 1 byte |
//! | `bool` | 1 byte, `0x01` / `0x00` |
//! | `u64` | 8 bytes, little-endian |
//! | address | 32 bytes from whole-byte hex, left-padded with zeros |
//! | `Option<T>` | tag `0x00` or `0x01`, then `T` only when present |
//! | sequence length | ULEB128 |

use crate::error::EncodeError;
use crate::shared::{AccountAddress, Amount, ADDRESS_LENGTH};

/// Presence tag for an absent optional value.
pub const OPTION_NONE_TAG: u8 = 0x00;
/// Presence tag for a present optional value.
pub const OPTION_SOME_TAG: u8 = 0x01;

/// Encode an integer in `[0, 255]` as a single byte.
pub fn encode_u8(value: impl Into<Amount>) -> Result<[u8; 1], EncodeError> {
    Ok([value.into().to_u8()?])
}

pub fn encode_bool(value: bool) -> [u8; 1] {
    [value as u8]
}

/// Encode an unsigned 64-bit integer as 8 little-endian bytes.
///
/// Accepts integers or decimal strings; negative values and values above
/// `u64::MAX` fail with a range error.
pub fn encode_u64_le(value: impl Into<Amount>) -> Result<[u8; 8], EncodeError> {
    Ok(value.into().to_u64()?.to_le_bytes())
}

/// Encode a hex address (optional `0x` prefix) as exactly 32 bytes.
pub fn encode_address(hex: &str) -> Result<[u8; ADDRESS_LENGTH], EncodeError> {
    AccountAddress::parse(hex).map(|addr| *addr.as_bytes())
}

/// Decode 32 encoded address bytes back into an [`AccountAddress`].
pub fn decode_address(bytes: &[u8]) -> Result<AccountAddress, EncodeError> {
    let fixed: [u8; ADDRESS_LENGTH] =
        bytes.try_into().map_err(|_| EncodeError::InvalidLength {
            expected: ADDRESS_LENGTH,
            actual: bytes.len(),
        })?;
    Ok(AccountAddress::new(fixed))
}

/// Encode an optional value: the presence tag, then the value only if present.
///
/// `encode_value` is not called when `present` is false.
pub fn encode_option<F>(present: bool, encode_value: F) -> Result<Vec<u8>, EncodeError>
where
    F: FnOnce() -> Result<Vec<u8>, EncodeError>,
{
    if !present {
        return Ok(vec![OPTION_NONE_TAG]);
    }
    let value = encode_value()?;
    let mut out = Vec::with_capacity(1 + value.len());
    out.push(OPTION_SOME_TAG);
    out.extend_from_slice(&value);
    Ok(out)
}

/// Encode an optional address (`tag` or `tag + 32 bytes`).
pub fn encode_option_address(address: Option<&str>) -> Result<Vec<u8>, EncodeError> {
    encode_option(address.is_some(), || match address {
        Some(hex) => encode_address(hex).map(|bytes| bytes.to_vec()),
        None => Ok(Vec::new()),
    })
}

/// Unsigned LEB128: 7 bits per byte, high bit set on all but the last byte.
pub fn encode_uleb128(mut value: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(2);
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return out;
        }
        out.push(byte | 0x80);
    }
}

/// Encode a sequence element count.
pub fn encode_sequence_length(len: usize) -> Vec<u8> {
    encode_uleb128(len)
}

/// Order-preserving concatenation; no padding or alignment between parts.
pub fn concat_bytes(parts: &[&[u8]]) -> Vec<u8> {
    let total = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}
