//! Transactions and the scripts they carry

mod script;
mod transaction;

pub use script::*;
pub use transaction::*;
