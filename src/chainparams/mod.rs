//! Network parameters - profile construction, registry and selection

mod builders;
mod error;
mod network;
mod profile;
mod registry;
mod selection;

pub use builders::{main_params, regtest_params, testnet_params, MAIN_SEED_TABLE};
pub use error::ParamsError;
pub use network::Network;
pub use profile::{Base58Type, NetworkProfile, ProfileSummary};
pub use registry::{params, registry, select_params, select_params_from_flags, ParamsRegistry};
pub use selection::NetworkFlags;
