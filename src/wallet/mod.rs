//! Wallet module - Base58Check encoding with network prefixes
//!
//! Format: Base58(prefix || payload || checksum[0:4]), where the checksum is
//! the SHA-256d of `prefix || payload`. The prefix ties a string to one
//! network, so decoding with another network's profile fails.

use crate::chainparams::{Base58Type, NetworkProfile, ParamsError};
use crate::crypto::hash_bytes;

const CHECKSUM_LEN: usize = 4;

/// Encode `payload` as `kind` for the given network
pub fn encode_address(profile: &NetworkProfile, kind: Base58Type, payload: &[u8]) -> String {
    let prefix = profile.base58_prefix(kind);
    let mut data = Vec::with_capacity(prefix.len() + payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);

    let checksum = hash_bytes(&data);
    data.extend_from_slice(&checksum.0[..CHECKSUM_LEN]);

    bs58::encode(data).into_string()
}

/// Decode a string of the given kind back to its payload
pub fn decode_address(
    profile: &NetworkProfile,
    kind: Base58Type,
    encoded: &str,
) -> Result<Vec<u8>, ParamsError> {
    let invalid = |reason| ParamsError::InvalidAddress {
        network: profile.network(),
        kind,
        reason,
    };

    let decoded = bs58::decode(encoded)
        .into_vec()
        .map_err(|_| invalid("invalid base58 encoding"))?;

    let prefix = profile.base58_prefix(kind);
    if decoded.len() < prefix.len() + CHECKSUM_LEN {
        return Err(invalid("too short"));
    }

    let (body, checksum) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if checksum != &hash_bytes(body).0[..CHECKSUM_LEN] {
        return Err(invalid("checksum mismatch"));
    }

    match body.strip_prefix(prefix) {
        Some(payload) => Ok(payload.to_vec()),
        None => Err(invalid("prefix belongs to another network")),
    }
}
