//! Construction of the three network profiles
//!
//! Main is built from literal constants. Testnet starts as a clone of Main
//! and Regtest as a clone of Testnet; each then overrides only the fields
//! listed in its builder. Every builder ends by checking the genesis block
//! it produced against the hash written down for that network.

use log::debug;
use primitive_types::U256;
use rand::Rng;

use super::{Base58Type, Network, NetworkProfile, ParamsError};
use crate::crypto::Hash;
use crate::node::{create_genesis_block, verify_genesis_hash, GenesisParams};
use crate::p2p::{fixed_seeds_from_table, DnsSeed};

const MAIN_MESSAGE_START: [u8; 4] = [0x86, 0xe4, 0x86, 0xae];
const MAIN_ALERT_PUBKEY: &str = "04fc9702847840aaf195de8442ebecedf5b095cdbb9bc716bda9110971b28a49e0ead8564ff0db22209e0374782c093bb899692d524e9d6a6956e7c5ecbcd68284";
const MAIN_GENESIS: GenesisParams = GenesisParams {
    time: 315532800,
    bits: 0x1d00ffff,
    nonce: 2214851013,
};
const MAIN_GENESIS_HASH: &str = "0000000013d1dfc64b8f226c1551079ea0b353a89b3f76b050a2487a068cf15a";
const MAIN_GENESIS_MERKLE_ROOT: &str =
    "1d5313d9a8bde3d5eabf473cba67a1851a1c160fa9d3bb95ff7b18c5de11eae9";

/// Compact IPv4 table of fixed main-network seeds
pub const MAIN_SEED_TABLE: [u32; 1] = [
    0x42b91f24, // games.soarcetech.com
];

const TESTNET_MESSAGE_START: [u8; 4] = [0x83, 0xe2, 0xae, 0x86];
const TESTNET_ALERT_PUBKEY: &str = "04302390343f91cc401d56d68b123028bf52e5fca1939df127f63c6467cdf9c8e2c14b61104cf817d0b780da337893ecc4aaff1309e536162dabbdb45200ca2b0a";
const TESTNET_GENESIS_HASH: &str =
    "00000000464a6775fade3f46d63538c96e42f0aa311c26c62fdb452c0601558a";

const REGTEST_MESSAGE_START: [u8; 4] = [0xde, 0xad, 0xbe, 0xef];
const REGTEST_GENESIS_HASH: &str =
    "22b0e2b5bbfb9f3b5f2679414777b08879c0e7692f7b5bf93b2841a3e0af10da";

/// Build the main network profile
///
/// `now` and `rng` age the fixed seeds.
pub fn main_params<R: Rng + ?Sized>(
    now: u64,
    rng: &mut R,
) -> Result<NetworkProfile, ParamsError> {
    let default_port = 57473;
    let genesis = create_genesis_block(MAIN_GENESIS);

    let profile = NetworkProfile {
        network: Network::Main,
        message_start: MAIN_MESSAGE_START,
        alert_pubkey: hex::decode(MAIN_ALERT_PUBKEY)?,
        default_port,
        rpc_port: 47472,
        pow_limit: !U256::zero() >> 32u32,
        subsidy_halving_interval: 210_000,
        genesis_hash: genesis.hash(),
        genesis,
        base58_prefixes: [
            vec![65],
            vec![68],
            vec![70],
            vec![0x04, 0x8a, 0xb4, 0x20],
            vec![0x04, 0x8a, 0xaf, 0xe6],
        ],
        dns_seeds: vec![DnsSeed::new("soarcetech.com", "seed.tatcoin.soarcetech.com")],
        fixed_seeds: fixed_seeds_from_table(&MAIN_SEED_TABLE, default_port, now, rng),
        data_dir: String::new(),
        require_rpc_password: true,
    };

    check_genesis(&profile, MAIN_GENESIS_HASH)?;
    check_merkle_root(&profile, MAIN_GENESIS_MERKLE_ROOT)?;
    check_genesis_pow(&profile)?;
    profile.alert_key()?;
    debug!("built {} params, genesis {}", profile.network, profile.genesis_hash);
    Ok(profile)
}

/// Derive the test network profile from Main
pub fn testnet_params(main: &NetworkProfile) -> Result<NetworkProfile, ParamsError> {
    let mut profile = main.clone();
    profile.network = Network::Testnet;
    profile.message_start = TESTNET_MESSAGE_START;
    profile.alert_pubkey = hex::decode(TESTNET_ALERT_PUBKEY)?;
    profile.default_port = 57475;
    profile.rpc_port = 57474;
    profile.data_dir = "testnet3".to_string();

    // Later start: only time and nonce move.
    profile.genesis.header.time = 315532807;
    profile.genesis.header.nonce = 20431863;
    profile.genesis_hash = profile.genesis.hash();
    check_genesis(&profile, TESTNET_GENESIS_HASH)?;
    check_genesis_pow(&profile)?;
    profile.alert_key()?;

    profile.fixed_seeds.clear();
    profile.dns_seeds = vec![DnsSeed::new(
        "soarcetech.com",
        "testnet-seed.tatcoin.soarcetech.com",
    )];

    set_prefix(&mut profile, Base58Type::PubkeyAddress, &[73]);
    set_prefix(&mut profile, Base58Type::ScriptAddress, &[75]);
    set_prefix(&mut profile, Base58Type::SecretKey, &[78]);
    set_prefix(&mut profile, Base58Type::ExtPublicKey, &[0x04, 0x37, 0x89, 0xd1]);
    set_prefix(&mut profile, Base58Type::ExtSecretKey, &[0x04, 0x37, 0x85, 0x96]);

    debug!("built {} params, genesis {}", profile.network, profile.genesis_hash);
    Ok(profile)
}

/// Derive the regression test profile from Testnet
///
/// Regtest never talks to the outside world: no seeds and no RPC password.
pub fn regtest_params(testnet: &NetworkProfile) -> Result<NetworkProfile, ParamsError> {
    let mut profile = testnet.clone();
    profile.network = Network::Regtest;
    profile.message_start = REGTEST_MESSAGE_START;
    profile.subsidy_halving_interval = 150;
    profile.pow_limit = !U256::zero() >> 1u32;

    profile.genesis.header.time = 1391388473;
    profile.genesis.header.bits = 0x207fffff;
    profile.genesis.header.nonce = 0;
    profile.genesis_hash = profile.genesis.hash();

    profile.default_port = 57476;
    profile.rpc_port = 57477;
    profile.data_dir = "regtest".to_string();
    check_genesis(&profile, REGTEST_GENESIS_HASH)?;
    check_genesis_pow(&profile)?;
    profile.alert_key()?;

    profile.dns_seeds.clear();
    profile.fixed_seeds.clear();
    profile.require_rpc_password = false;

    set_prefix(&mut profile, Base58Type::PubkeyAddress, &[111]);
    set_prefix(&mut profile, Base58Type::ScriptAddress, &[196]);
    set_prefix(&mut profile, Base58Type::SecretKey, &[239]);
    set_prefix(&mut profile, Base58Type::ExtPublicKey, &[0x04, 0x35, 0x87, 0xcf]);
    set_prefix(&mut profile, Base58Type::ExtSecretKey, &[0x04, 0x35, 0x83, 0x94]);

    debug!("built {} params, genesis {}", profile.network, profile.genesis_hash);
    Ok(profile)
}

fn set_prefix(profile: &mut NetworkProfile, kind: Base58Type, prefix: &[u8]) {
    profile.base58_prefixes[kind.index()] = prefix.to_vec();
}

/// Recompute the genesis hash from the block and compare it with both the
/// stored hash and the hardcoded one
pub(crate) fn check_genesis(
    profile: &NetworkProfile,
    expected_hex: &str,
) -> Result<(), ParamsError> {
    let expected = Hash::from_hex(expected_hex)?;
    if !verify_genesis_hash(&profile.genesis, &expected) || profile.genesis_hash != expected {
        return Err(ParamsError::GenesisHashMismatch {
            network: profile.network,
            expected,
            computed: profile.genesis.hash(),
        });
    }
    Ok(())
}

/// The genesis block must satisfy its own header bits under the network's
/// proof-of-work limit
pub(crate) fn check_genesis_pow(profile: &NetworkProfile) -> Result<(), ParamsError> {
    let header = &profile.genesis.header;
    if !profile.check_proof_of_work(&profile.genesis_hash, header.bits)? {
        return Err(ParamsError::GenesisProofOfWork {
            network: profile.network,
        });
    }
    Ok(())
}

pub(crate) fn check_merkle_root(
    profile: &NetworkProfile,
    expected_hex: &str,
) -> Result<(), ParamsError> {
    let expected = Hash::from_hex(expected_hex)?;
    let computed = profile.genesis.build_merkle_root();
    if computed != expected || profile.genesis.header.merkle_root != expected {
        return Err(ParamsError::GenesisMerkleMismatch {
            network: profile.network,
            expected,
            computed,
        });
    }
    Ok(())
}
