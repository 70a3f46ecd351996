//! TAT Blockchain network parameters
//!
//! Defines the main, test and regression-test networks (genesis block,
//! message magic, address prefixes, ports, proof-of-work ceiling, seeds)
//! and holds the single network the running process has selected.
//!
//! ```no_run
//! use tat_params::chainparams::{params, select_params_from_flags, NetworkFlags};
//!
//! select_params_from_flags(NetworkFlags::new(true, false)).expect("conflicting flags");
//! println!("listening on {}", params().default_port());
//! ```

pub mod chainparams;
pub mod consensus;
pub mod crypto;
pub mod node;
pub mod p2p;
pub mod validation;
pub mod wallet;

pub use chainparams::{params, select_params, select_params_from_flags, Network, NetworkProfile};

/// Protocol constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base units per coin
    pub const COIN: i64 = 100_000_000;

    /// Coins paid by the (unspendable) genesis coinbase
    pub const GENESIS_REWARD_COINS: i64 = 50;

    /// Headline embedded in every genesis coinbase
    pub const GENESIS_TIMESTAMP_MESSAGE: &str =
        "Anatol Rapoport-1980 Being 'nice' can be beneficial, but it can also lead to being suckered";

    /// First number pushed by the genesis scriptSig (the main network bits)
    pub const GENESIS_COINBASE_BITS: i64 = 486604799;

    /// Second number pushed by the genesis scriptSig
    pub const GENESIS_COINBASE_EXTRA_NONCE: i64 = 4;

    /// Public key paid by the genesis coinbase output
    pub const GENESIS_OUTPUT_PUBKEY: [u8; 65] = [
        0x04, 0x85, 0x5b, 0x33, 0x2d, 0x7a, 0xb6, 0xfc, 0xab, 0xce, 0x6b, 0x72, 0x82, 0xc6, 0xd4,
        0x47, 0xdb, 0x25, 0xe7, 0x7b, 0x3f, 0xb7, 0x05, 0xf4, 0x97, 0xbd, 0x67, 0x3f, 0x3c, 0x47,
        0xfc, 0xbf, 0x6f, 0x29, 0x68, 0x62, 0x3b, 0xb4, 0x04, 0x7f, 0x0d, 0x8b, 0x59, 0xaa, 0x1e,
        0x5c, 0xc0, 0xa9, 0xff, 0xf8, 0x31, 0x5f, 0x7d, 0x46, 0xc7, 0x5c, 0x4d, 0x16, 0x71, 0xeb,
        0xb6, 0xcb, 0x27, 0xbf, 0x46,
    ];
}
