//! P2P bootstrap data - DNS seeds and fixed seed addresses

mod seeds;

pub use seeds::*;
