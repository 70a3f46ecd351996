//! The per-network parameter record
//!
//! A [`NetworkProfile`] is built once and never mutated afterwards: fields
//! are crate-private and only the builders in this module tree touch them.

use primitive_types::U256;
use serde::{Deserialize, Serialize};

use super::{Network, ParamsError};
use crate::consensus::{compact_to_target, hash_to_u256, target_to_compact, Block};
use crate::crypto::{AlertError, AlertKey, Hash};
use crate::node::GenesisInfo;
use crate::p2p::{DnsSeed, SeedAddress};

/// Kinds of Base58Check-encoded data that carry a network prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Base58Type {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
}

impl Base58Type {
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Base58Type::PubkeyAddress => 0,
            Base58Type::ScriptAddress => 1,
            Base58Type::SecretKey => 2,
            Base58Type::ExtPublicKey => 3,
            Base58Type::ExtSecretKey => 4,
        }
    }
}

/// Complete, immutable parameter set identifying one network
#[derive(Debug, Clone)]
pub struct NetworkProfile {
    pub(crate) network: Network,
    pub(crate) message_start: [u8; 4],
    pub(crate) alert_pubkey: Vec<u8>,
    pub(crate) default_port: u16,
    pub(crate) rpc_port: u16,
    pub(crate) pow_limit: U256,
    pub(crate) subsidy_halving_interval: u32,
    pub(crate) genesis: Block,
    pub(crate) genesis_hash: Hash,
    pub(crate) base58_prefixes: [Vec<u8>; 5],
    pub(crate) dns_seeds: Vec<DnsSeed>,
    pub(crate) fixed_seeds: Vec<SeedAddress>,
    pub(crate) data_dir: String,
    pub(crate) require_rpc_password: bool,
}

impl NetworkProfile {
    pub fn network(&self) -> Network {
        self.network
    }

    /// Magic bytes prefixing every P2P message on this network
    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    /// SEC1 public key that signs network alerts
    pub fn alert_pubkey(&self) -> &[u8] {
        &self.alert_pubkey
    }

    /// Parsed alert key, ready for signature checks
    pub fn alert_key(&self) -> Result<AlertKey, AlertError> {
        AlertKey::from_sec1_bytes(&self.alert_pubkey)
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    pub fn rpc_port(&self) -> u16 {
        self.rpc_port
    }

    /// Easiest target a block may claim
    pub fn pow_limit(&self) -> U256 {
        self.pow_limit
    }

    /// Compact form of [`pow_limit`](Self::pow_limit)
    pub fn pow_limit_bits(&self) -> u32 {
        target_to_compact(self.pow_limit)
    }

    pub fn is_target_within_limit(&self, target: &U256) -> bool {
        !target.is_zero() && *target <= self.pow_limit
    }

    /// Whether `hash` meets the target encoded in `bits` on this network
    ///
    /// Bits that decode to a target above the limit never pass, whatever
    /// the hash.
    pub fn check_proof_of_work(&self, hash: &Hash, bits: u32) -> Result<bool, ParamsError> {
        let target = compact_to_target(bits)?;
        Ok(self.is_target_within_limit(&target) && hash_to_u256(hash) <= target)
    }

    pub fn subsidy_halving_interval(&self) -> u32 {
        self.subsidy_halving_interval
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn genesis_hash(&self) -> Hash {
        self.genesis_hash
    }

    pub fn base58_prefix(&self, kind: Base58Type) -> &[u8] {
        &self.base58_prefixes[kind.index()]
    }

    pub fn dns_seeds(&self) -> &[DnsSeed] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[SeedAddress] {
        &self.fixed_seeds
    }

    /// Subdirectory isolating this network's on-disk state (empty for main)
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    /// Whether RPC access requires credentials
    pub fn require_rpc_password(&self) -> bool {
        self.require_rpc_password
    }

    /// Serializable overview of the profile
    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            network: self.network,
            message_start: hex::encode(self.message_start),
            default_port: self.default_port,
            rpc_port: self.rpc_port,
            pow_limit_bits: format!("{:08x}", self.pow_limit_bits()),
            subsidy_halving_interval: self.subsidy_halving_interval,
            genesis: GenesisInfo::new(&self.genesis),
            base58_prefixes: Base58Type::ALL
                .iter()
                .map(|kind| (*kind, hex::encode(self.base58_prefix(*kind))))
                .collect(),
            dns_seeds: self.dns_seeds.clone(),
            fixed_seeds: self.fixed_seeds.clone(),
            data_dir: self.data_dir.clone(),
            require_rpc_password: self.require_rpc_password,
        }
    }
}

/// Human-facing view of a [`NetworkProfile`]
#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub network: Network,
    pub message_start: String,
    pub default_port: u16,
    pub rpc_port: u16,
    pub pow_limit_bits: String,
    pub subsidy_halving_interval: u32,
    pub genesis: GenesisInfo,
    pub base58_prefixes: Vec<(Base58Type, String)>,
    pub dns_seeds: Vec<DnsSeed>,
    pub fixed_seeds: Vec<SeedAddress>,
    pub data_dir: String,
    pub require_rpc_password: bool,
}
