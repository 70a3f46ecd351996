//! Startup selection policy
//!
//! Turns the two independent network flags into exactly one network.

use super::{Network, ParamsError};

/// Network flags as parsed from the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkFlags {
    pub testnet: bool,
    pub regtest: bool,
}

impl NetworkFlags {
    pub fn new(testnet: bool, regtest: bool) -> Self {
        Self { testnet, regtest }
    }

    /// Resolve the flags to a network
    ///
    /// Asking for both test networks at once is a configuration conflict;
    /// the caller decides how to report it and stop.
    pub fn resolve(self) -> Result<Network, ParamsError> {
        match (self.testnet, self.regtest) {
            (true, true) => Err(ParamsError::ConflictingNetworks),
            (_, true) => Ok(Network::Regtest),
            (true, false) => Ok(Network::Testnet),
            (false, false) => Ok(Network::Main),
        }
    }
}
