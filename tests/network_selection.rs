//! Process-wide network selection
//!
//! The global registry is shared by every test in this binary, so the whole
//! startup sequence runs inside a single test to keep the order fixed.

use tat_params::chainparams::{registry, NetworkFlags, ParamsError};
use tat_params::{params, select_params, select_params_from_flags, Network};

#[test]
fn test_global_selection_lifecycle() {
    // Nothing selected yet: Main
    assert_eq!(params().network(), Network::Main);
    assert_eq!(registry().active_network(), Network::Main);

    for network in Network::ALL {
        select_params(network);
        let first = params();
        assert_eq!(first.network(), network);

        select_params(network);
        let second = params();
        assert!(std::ptr::eq(first, second));
        assert_eq!(second.genesis_hash(), registry().get(network).genesis_hash());
    }

    assert_eq!(select_params_from_flags(NetworkFlags::new(true, false)), Ok(Network::Testnet));
    assert_eq!(params().network(), Network::Testnet);
    assert_eq!(params().default_port(), 57475);

    assert_eq!(select_params_from_flags(NetworkFlags::new(false, true)), Ok(Network::Regtest));
    assert_eq!(params().network(), Network::Regtest);
    assert!(!params().require_rpc_password());

    // Conflict is reported and the Regtest selection stands
    assert_eq!(
        select_params_from_flags(NetworkFlags::new(true, true)),
        Err(ParamsError::ConflictingNetworks)
    );
    assert_eq!(params().network(), Network::Regtest);

    assert_eq!(select_params_from_flags(NetworkFlags::default()), Ok(Network::Main));
    assert_eq!(params().network(), Network::Main);
    assert_eq!(params().default_port(), 57473);

    // Profiles handed out earlier stay valid after reselection
    let held = params();
    select_params(Network::Testnet);
    assert_eq!(held.network(), Network::Main);
    assert_eq!(params().network(), Network::Testnet);
}
