//! Genesis block generation for the TAT networks
//!
//! All three networks share the same coinbase transaction; they differ only
//! in the header's time, bits and nonce. The resulting hash is checked
//! against a hardcoded value when a network profile is built.

use serde::Serialize;

use crate::consensus::{Block, BlockHeader};
use crate::constants::{
    COIN, GENESIS_COINBASE_BITS, GENESIS_COINBASE_EXTRA_NONCE, GENESIS_OUTPUT_PUBKEY,
    GENESIS_REWARD_COINS, GENESIS_TIMESTAMP_MESSAGE,
};
use crate::crypto::Hash;
use crate::validation::{Script, Transaction, OP_CHECKSIG};

/// Genesis block version
const GENESIS_VERSION: i32 = 1;

/// Header fields that vary between networks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisParams {
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// Build the genesis coinbase transaction
///
/// Its output can never be spent: it predates any ledger that could
/// reference it.
pub fn genesis_coinbase() -> Transaction {
    let script_sig = Script::new()
        .push_num(GENESIS_COINBASE_BITS)
        .push_num(GENESIS_COINBASE_EXTRA_NONCE)
        .push_slice(GENESIS_TIMESTAMP_MESSAGE.as_bytes());

    let script_pubkey = Script::new()
        .push_slice(&GENESIS_OUTPUT_PUBKEY)
        .push_opcode(OP_CHECKSIG);

    Transaction::coinbase(script_sig, GENESIS_REWARD_COINS * COIN, script_pubkey)
}

/// Create the genesis block for the given header parameters
///
/// This function produces a reproducible, byte-for-byte identical block.
pub fn create_genesis_block(params: GenesisParams) -> Block {
    let transactions = vec![genesis_coinbase()];
    let mut block = Block::new(
        BlockHeader::new(
            GENESIS_VERSION,
            Hash::zero(),
            Hash::zero(),
            params.time,
            params.bits,
            params.nonce,
        ),
        transactions,
    );
    block.header.merkle_root = block.build_merkle_root();
    block
}

/// Verify genesis block matches expected hash
pub fn verify_genesis_hash(block: &Block, expected_hash: &Hash) -> bool {
    block.hash() == *expected_hash
}

/// Genesis block statistics
#[derive(Debug, Clone, Serialize)]
pub struct GenesisInfo {
    pub hash: Hash,
    pub merkle_root: Hash,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl GenesisInfo {
    pub fn new(block: &Block) -> Self {
        Self {
            hash: block.hash(),
            merkle_root: block.header.merkle_root,
            time: block.header.time,
            bits: block.header.bits,
            nonce: block.header.nonce,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN: GenesisParams = GenesisParams {
        time: 315532800,
        bits: 0x1d00ffff,
        nonce: 2214851013,
    };

    #[test]
    fn test_genesis_is_deterministic() {
        assert_eq!(create_genesis_block(MAIN), create_genesis_block(MAIN));
    }

    #[test]
    fn test_coinbase_layout() {
        let tx = genesis_coinbase();
        assert!(tx.is_coinbase());
        assert_eq!(tx.total_output_value(), 50 * COIN);

        let script_sig = tx.inputs[0].script_sig.as_bytes();
        assert_eq!(&script_sig[..7], &[0x04, 0xff, 0xff, 0x00, 0x1d, 0x01, 0x04]);
        // 91-byte message needs OP_PUSHDATA1
        assert_eq!(&script_sig[7..9], &[0x4c, 91]);

        let script_pubkey = tx.outputs[0].script_pubkey.as_bytes();
        assert_eq!(script_pubkey.len(), 67);
        assert_eq!(script_pubkey[66], OP_CHECKSIG);
    }

    #[test]
    fn test_known_merkle_root() {
        let block = create_genesis_block(MAIN);
        assert_eq!(
            block.header.merkle_root.to_hex(),
            "1d5313d9a8bde3d5eabf473cba67a1851a1c160fa9d3bb95ff7b18c5de11eae9"
        );
    }

    #[test]
    fn test_known_hash() {
        let block = create_genesis_block(MAIN);
        let expected = Hash::from_hex(
            "0000000013d1dfc64b8f226c1551079ea0b353a89b3f76b050a2487a068cf15a",
        )
        .unwrap();
        assert!(verify_genesis_hash(&block, &expected));
        assert!(block.is_genesis());
    }

    #[test]
    fn test_nonce_is_part_of_identity() {
        let block = create_genesis_block(GenesisParams { nonce: 0, ..MAIN });
        let info = GenesisInfo::new(&block);
        assert_eq!(info.nonce, 0);
        assert_ne!(info.hash, create_genesis_block(MAIN).hash());
        // merkle root does not depend on the header
        assert_eq!(info.merkle_root, create_genesis_block(MAIN).header.merkle_root);
    }
}
