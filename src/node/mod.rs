//! Node bootstrap data - the genesis block

mod genesis;

pub use genesis::*;
