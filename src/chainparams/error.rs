use thiserror::Error;

use super::{Base58Type, Network};
use crate::consensus::CompactError;
use crate::crypto::{AlertError, Hash};

/// Network parameter errors
#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("{network} genesis hash mismatch: expected {expected}, computed {computed}")]
    GenesisHashMismatch {
        network: Network,
        expected: Hash,
        computed: Hash,
    },
    #[error("{network} genesis merkle root mismatch: expected {expected}, computed {computed}")]
    GenesisMerkleMismatch {
        network: Network,
        expected: Hash,
        computed: Hash,
    },
    #[error("testnet and regtest cannot both be selected")]
    ConflictingNetworks,
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    #[error("Invalid hex constant: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("Invalid alert key: {0}")]
    InvalidAlertKey(#[from] AlertError),
    #[error("Invalid compact target: {0}")]
    InvalidCompact(#[from] CompactError),
    #[error("{network} genesis block does not meet its proof-of-work target")]
    GenesisProofOfWork { network: Network },
    #[error("system clock is set before the unix epoch")]
    ClockBeforeEpoch,
    #[error("Invalid {kind:?} for {network}: {reason}")]
    InvalidAddress {
        network: Network,
        kind: Base58Type,
        reason: &'static str,
    },
}
