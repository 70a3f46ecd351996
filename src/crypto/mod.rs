//! Cryptography module - SHA-256d hashing, Merkle trees, alert key checks

mod alert;
mod hash;
mod merkle;

pub use alert::*;
pub use hash::*;
pub use merkle::*;
