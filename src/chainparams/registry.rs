//! Profile registry and the process-wide active network
//!
//! All three profiles are built together, once. The only mutable state is
//! which of them is active.
//!
//! Lifecycle of the global registry: the first call to [`params`],
//! [`select_params`] or [`registry`] builds every profile and activates Main.
//! Startup code then selects the network once, before any worker thread
//! reads the profile. A later reselection is memory safe (the selector is
//! atomic) but code that already holds a `&'static NetworkProfile` keeps
//! the profile it was given.

use log::info;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

use super::builders::{main_params, regtest_params, testnet_params};
use super::{Network, NetworkFlags, NetworkProfile, ParamsError};
use crate::p2p::unix_now;

/// The three network profiles plus the active selection
///
/// Usable as a plain value where a caller wants several configurations in
/// one process (tests, tooling); the node itself goes through [`registry`].
#[derive(Debug)]
pub struct ParamsRegistry {
    main: NetworkProfile,
    testnet: NetworkProfile,
    regtest: NetworkProfile,
    active: AtomicU8,
}

impl ParamsRegistry {
    /// Build every profile
    ///
    /// # Panics
    ///
    /// Panics if the embedded constants are inconsistent (a genesis block
    /// that does not hash to its hardcoded value). The binary cannot
    /// identify its own chain in that case, so there is nothing to recover.
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(registry) => registry,
            Err(err) => panic!("embedded network parameters are inconsistent: {err}"),
        }
    }

    /// Build every profile, seeding fixed-seed ages from the thread RNG and
    /// the system clock
    ///
    /// A clock set before the unix epoch is an error: fixed seeds cannot be
    /// aged relative to it.
    pub fn try_new() -> Result<Self, ParamsError> {
        let now = unix_now().ok_or(ParamsError::ClockBeforeEpoch)?;
        Self::build(now, &mut rand::thread_rng())
    }

    /// Build every profile with an explicit clock and random source
    pub fn build<R: rand::Rng + ?Sized>(now: u64, rng: &mut R) -> Result<Self, ParamsError> {
        let main = main_params(now, rng)?;
        let testnet = testnet_params(&main)?;
        let regtest = regtest_params(&testnet)?;

        Ok(Self {
            main,
            testnet,
            regtest,
            active: AtomicU8::new(Network::Main.as_u8()),
        })
    }

    /// Profile for a specific network, regardless of selection
    pub fn get(&self, network: Network) -> &NetworkProfile {
        match network {
            Network::Main => &self.main,
            Network::Testnet => &self.testnet,
            Network::Regtest => &self.regtest,
        }
    }

    /// Make `network` the active profile
    pub fn select(&self, network: Network) {
        let previous = self.active.swap(network.as_u8(), Ordering::AcqRel);
        if previous != network.as_u8() {
            info!("selected {} network parameters", network);
        }
    }

    /// Apply the startup flags
    ///
    /// On a conflict the active profile is left untouched.
    pub fn select_from_flags(&self, flags: NetworkFlags) -> Result<Network, ParamsError> {
        let network = flags.resolve()?;
        self.select(network);
        Ok(network)
    }

    pub fn active_network(&self) -> Network {
        match self.active.load(Ordering::Acquire) {
            1 => Network::Testnet,
            2 => Network::Regtest,
            _ => Network::Main,
        }
    }

    pub fn active(&self) -> &NetworkProfile {
        self.get(self.active_network())
    }

    pub fn profiles(&self) -> [&NetworkProfile; 3] {
        [&self.main, &self.testnet, &self.regtest]
    }
}

impl Default for ParamsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: OnceLock<ParamsRegistry> = OnceLock::new();

/// The process-wide registry, built on first use
pub fn registry() -> &'static ParamsRegistry {
    REGISTRY.get_or_init(ParamsRegistry::new)
}

/// The active network profile
pub fn params() -> &'static NetworkProfile {
    registry().active()
}

/// Select the process-wide network; call once during startup
pub fn select_params(network: Network) {
    registry().select(network);
}

/// Select the process-wide network from the startup flags
pub fn select_params_from_flags(flags: NetworkFlags) -> Result<Network, ParamsError> {
    registry().select_from_flags(flags)
}
