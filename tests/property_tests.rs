//! Property-based and cross-network tests for the TAT network parameters
//!
//! These tests verify invariants that span all three profiles and hold
//! under random inputs.

use primitive_types::U256;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tat_params::chainparams::{Base58Type, Network, NetworkFlags, ParamsError, ParamsRegistry};
use tat_params::consensus::{compact_to_target, target_to_compact, BlockHeader};
use tat_params::crypto::Hash;
use tat_params::p2p::ONE_WEEK;
use tat_params::wallet::{decode_address, encode_address};

const NOW: u64 = 1_700_000_000;

fn registry() -> ParamsRegistry {
    ParamsRegistry::build(NOW, &mut StdRng::seed_from_u64(0)).unwrap()
}

// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

proptest! {
    /// Compressing a target never rounds it up
    #[test]
    fn prop_compact_rounds_down(bytes in proptest::array::uniform32(any::<u8>())) {
        let target = U256::from_big_endian(&bytes);
        let bits = target_to_compact(target);
        let expanded = compact_to_target(bits).unwrap();
        prop_assert!(expanded <= target);
    }

    /// Canonical compact values survive a round trip
    #[test]
    fn prop_compact_canonical_roundtrip(size in 4u32..=32, mantissa in 0x8000u32..0x7f_ffff) {
        let bits = (size << 24) | mantissa;
        let target = compact_to_target(bits).unwrap();
        prop_assert_eq!(target_to_compact(target), bits);
    }

    /// Block hash is deterministic
    #[test]
    fn prop_block_hash_deterministic(
        version in 1i32..10,
        time in any::<u32>(),
        bits in 0x1c000001u32..0x1f000000u32,
        nonce in any::<u32>()
    ) {
        let header1 = BlockHeader::new(version, Hash::zero(), Hash::zero(), time, bits, nonce);
        let header2 = BlockHeader::new(version, Hash::zero(), Hash::zero(), time, bits, nonce);
        prop_assert_eq!(header1.hash(), header2.hash());
    }

    /// Flag resolution: never both, and a conflict leaves selection alone
    #[test]
    fn prop_flag_selection(testnet in any::<bool>(), regtest in any::<bool>(), start in 0u8..3) {
        let registry = registry();
        let start = Network::try_from(start).unwrap();
        registry.select(start);

        let result = registry.select_from_flags(NetworkFlags::new(testnet, regtest));
        let expected = match (testnet, regtest) {
            (true, true) => Err(ParamsError::ConflictingNetworks),
            (false, true) => Ok(Network::Regtest),
            (true, false) => Ok(Network::Testnet),
            (false, false) => Ok(Network::Main),
        };
        prop_assert_eq!(&result, &expected);

        let active = result.unwrap_or(start);
        prop_assert_eq!(registry.active_network(), active);
        prop_assert_eq!(registry.active().network(), active);
    }

    /// Fixed seeds are always aged between one and two weeks
    #[test]
    fn prop_fixed_seed_age(seed in any::<u64>(), now in (3 * ONE_WEEK)..u32::MAX as u64) {
        let registry = ParamsRegistry::build(now, &mut StdRng::seed_from_u64(seed)).unwrap();
        for network in [Network::Main, Network::Testnet] {
            for fixed in registry.get(network).fixed_seeds() {
                prop_assert!(fixed.last_seen < now - ONE_WEEK);
                prop_assert!(fixed.last_seen > now - 2 * ONE_WEEK);
            }
        }
    }

    /// Addresses are only valid on the network that encoded them
    #[test]
    fn prop_address_bound_to_network(payload in proptest::collection::vec(any::<u8>(), 20)) {
        let registry = registry();
        let kind = Base58Type::PubkeyAddress;
        for encoder in Network::ALL {
            let address = encode_address(registry.get(encoder), kind, &payload);
            for decoder in Network::ALL {
                let decoded = decode_address(registry.get(decoder), kind, &address);
                if encoder == decoder {
                    prop_assert_eq!(decoded.unwrap(), payload.clone());
                } else {
                    prop_assert!(decoded.is_err());
                }
            }
        }
    }
}

// ============================================================================
// CROSS-NETWORK INVARIANTS
// ============================================================================

#[test]
fn test_genesis_recomputes_to_stored_hash() {
    let registry = registry();
    for profile in registry.profiles() {
        let genesis = profile.genesis_block();
        assert_eq!(genesis.hash(), profile.genesis_hash());
        assert_eq!(genesis.build_merkle_root(), genesis.header.merkle_root);
        assert!(genesis.is_genesis());
        assert_eq!(genesis.transactions.len(), 1);
    }

    let main = registry.get(Network::Main);
    assert_eq!(
        main.genesis_block().header.merkle_root.to_hex(),
        "1d5313d9a8bde3d5eabf473cba67a1851a1c160fa9d3bb95ff7b18c5de11eae9"
    );
}

#[test]
fn test_known_genesis_hashes() {
    let registry = registry();
    let expected = [
        (Network::Main, "0000000013d1dfc64b8f226c1551079ea0b353a89b3f76b050a2487a068cf15a"),
        (Network::Testnet, "00000000464a6775fade3f46d63538c96e42f0aa311c26c62fdb452c0601558a"),
        (Network::Regtest, "22b0e2b5bbfb9f3b5f2679414777b08879c0e7692f7b5bf93b2841a3e0af10da"),
    ];
    for (network, hash) in expected {
        assert_eq!(registry.get(network).genesis_hash().to_hex(), hash);
    }
}

#[test]
fn test_network_identity_is_pairwise_distinct() {
    let registry = registry();
    let profiles = registry.profiles();

    let magics: HashSet<[u8; 4]> = profiles.iter().map(|p| p.message_start()).collect();
    let ports: HashSet<u16> = profiles.iter().map(|p| p.default_port()).collect();
    let rpc_ports: HashSet<u16> = profiles.iter().map(|p| p.rpc_port()).collect();
    let ids: HashSet<Network> = profiles.iter().map(|p| p.network()).collect();
    let hashes: HashSet<Hash> = profiles.iter().map(|p| p.genesis_hash()).collect();

    assert_eq!(magics.len(), 3);
    assert_eq!(ports.len(), 3);
    assert_eq!(rpc_ports.len(), 3);
    assert_eq!(ids.len(), 3);
    assert_eq!(hashes.len(), 3);
}

#[test]
fn test_address_prefixes_are_pairwise_distinct() {
    let registry = registry();
    let profiles = registry.profiles();

    for kind in Base58Type::ALL {
        let prefixes: HashSet<&[u8]> = profiles.iter().map(|p| p.base58_prefix(kind)).collect();
        assert_eq!(prefixes.len(), 3, "{kind:?} prefix shared between networks");
    }
}

#[test]
fn test_seed_lists() {
    let registry = registry();

    let regtest = registry.get(Network::Regtest);
    assert!(regtest.dns_seeds().is_empty());
    assert!(regtest.fixed_seeds().is_empty());

    let main = registry.get(Network::Main);
    assert!(!main.fixed_seeds().is_empty());
    for profile in [main, registry.get(Network::Testnet)] {
        assert!(!profile.dns_seeds().is_empty());
        for fixed in profile.fixed_seeds() {
            assert!(fixed.last_seen < NOW - ONE_WEEK);
            assert!(fixed.last_seen > NOW - 2 * ONE_WEEK);
        }
    }
}

#[test]
fn test_rpc_password_requirement() {
    let registry = registry();
    assert!(registry.get(Network::Main).require_rpc_password());
    assert!(registry.get(Network::Testnet).require_rpc_password());
    assert!(!registry.get(Network::Regtest).require_rpc_password());
}

#[test]
fn test_data_dirs_isolate_test_networks() {
    let registry = registry();
    assert_eq!(registry.get(Network::Main).data_dir(), "");
    assert_eq!(registry.get(Network::Testnet).data_dir(), "testnet3");
    assert_eq!(registry.get(Network::Regtest).data_dir(), "regtest");
}

#[test]
fn test_genesis_satisfies_pow_limit() {
    let registry = registry();
    for profile in registry.profiles() {
        let target = compact_to_target(profile.genesis_block().header.bits).unwrap();
        assert!(profile.is_target_within_limit(&target));
    }
    // Regtest's genesis target is far above the main ceiling.
    let regtest_target = compact_to_target(0x207fffff).unwrap();
    assert!(!registry.get(Network::Main).is_target_within_limit(&regtest_target));
}

#[test]
fn test_proof_of_work_check() {
    let registry = registry();
    for profile in registry.profiles() {
        let bits = profile.genesis_block().header.bits;
        assert_eq!(profile.check_proof_of_work(&profile.genesis_hash(), bits), Ok(true));
        assert_eq!(profile.check_proof_of_work(&Hash::from_bytes([0xff; 32]), bits), Ok(false));
    }

    // A zero hash still fails when the bits exceed the network limit.
    let main = registry.get(Network::Main);
    assert_eq!(main.check_proof_of_work(&Hash::zero(), 0x207fffff), Ok(false));
    assert!(matches!(
        main.check_proof_of_work(&Hash::zero(), 0x04923456),
        Err(ParamsError::InvalidCompact(_))
    ));
}
