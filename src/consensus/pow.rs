//! Compact target encoding
//!
//! Converts between the 32-bit "bits" form stored in headers and the full
//! 256-bit target. Each network's proof-of-work ceiling is kept as a
//! [`U256`] and exposed in compact form for difficulty code.

use primitive_types::U256;
use thiserror::Error;

use crate::crypto::Hash;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CompactError {
    #[error("compact target has negative sign bit")]
    Negative,
    #[error("compact target overflows 256-bit range")]
    Overflow,
}

/// Expand compact bits into a 256-bit target
pub fn compact_to_target(bits: u32) -> Result<U256, CompactError> {
    let size = bits >> 24;
    let mut word = bits & 0x007f_ffff;

    if bits & 0x0080_0000 != 0 && word != 0 {
        return Err(CompactError::Negative);
    }

    if word != 0 {
        let overflow = size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32);
        if overflow {
            return Err(CompactError::Overflow);
        }
    }

    let value = if size <= 3 {
        word >>= 8 * (3 - size);
        U256::from(word)
    } else {
        U256::from(word) << (8 * (size - 3)) as usize
    };

    Ok(value)
}

/// Compress a 256-bit target into compact bits (rounding down)
pub fn target_to_compact(value: U256) -> u32 {
    if value.is_zero() {
        return 0;
    }

    let mut size = ((value.bits() + 7) / 8) as u32;
    let mut compact = if size <= 3 {
        value.low_u32() << (8 * (3 - size))
    } else {
        (value >> (8 * (size - 3)) as usize).low_u32()
    };

    // Keep the mantissa positive.
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }

    (size << 24) | (compact & 0x007f_ffff)
}

/// Interpret a hash (internal byte order) as a 256-bit number
pub fn hash_to_u256(hash: &Hash) -> U256 {
    U256::from_little_endian(&hash.0)
}
