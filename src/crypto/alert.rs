//! Network alert authentication
//!
//! Each network profile carries the public key that signs network-wide
//! alert messages. Alerts are signed with ECDSA over secp256k1; the signed
//! digest is the SHA-256d of the serialized alert payload.

use k256::ecdsa::signature::hazmat::PrehashVerifier;
use k256::ecdsa::{Signature, VerifyingKey};
use thiserror::Error;

use super::hash_bytes;

/// Alert verification errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlertError {
    #[error("Invalid alert public key")]
    InvalidPublicKey,
    #[error("Malformed DER signature")]
    MalformedSignature,
    #[error("Alert signature does not match payload")]
    BadSignature,
}

/// Parsed alert signing key
#[derive(Debug, Clone)]
pub struct AlertKey(VerifyingKey);

impl AlertKey {
    /// Parse a SEC1-encoded public key (compressed or uncompressed)
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, AlertError> {
        VerifyingKey::from_sec1_bytes(bytes)
            .map(AlertKey)
            .map_err(|_| AlertError::InvalidPublicKey)
    }

    /// Verify a DER signature over `payload`
    ///
    /// High-S signatures are normalized before checking.
    pub fn verify(&self, payload: &[u8], der_signature: &[u8]) -> Result<(), AlertError> {
        let signature =
            Signature::from_der(der_signature).map_err(|_| AlertError::MalformedSignature)?;
        let signature = signature.normalize_s().unwrap_or(signature);
        let digest = hash_bytes(payload);

        self.0
            .verify_prehash(&digest.0, &signature)
            .map_err(|_| AlertError::BadSignature)
    }

    /// Uncompressed SEC1 encoding
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.0.to_encoded_point(false).as_bytes().to_vec()
    }
}
