//! Consensus module - Block structure and compact target encoding

mod block;
mod pow;

pub use block::*;
pub use pow::*;
