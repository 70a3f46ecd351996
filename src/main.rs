//! TAT network parameter inspector
//!
//! Applies the node's startup network selection and prints the resulting
//! parameter profile.

use clap::Parser;
use std::process::ExitCode;
use tat_params::chainparams::{params, select_params_from_flags, Base58Type, NetworkFlags};

#[derive(Debug, Parser)]
#[command(name = "tat-params", version, about = "Show TAT network parameters")]
struct Args {
    /// Use the test network
    #[arg(long)]
    testnet: bool,

    /// Use the regression test network
    #[arg(long)]
    regtest: bool,

    /// Print the profile as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = select_params_from_flags(NetworkFlags::new(args.testnet, args.regtest)) {
        eprintln!("Error: {err}. Use at most one of --testnet and --regtest.");
        return Ok(ExitCode::FAILURE);
    }

    let profile = params();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile.summary())?);
        return Ok(ExitCode::SUCCESS);
    }

    let genesis = profile.genesis_block();
    println!("Network:        {}", profile.network());
    println!("Magic:          {}", hex::encode(profile.message_start()));
    println!("P2P port:       {}", profile.default_port());
    println!("RPC port:       {}", profile.rpc_port());
    let rpc_password = if profile.require_rpc_password() {
        "required"
    } else {
        "not required"
    };
    let data_dir = match profile.data_dir() {
        "" => ".",
        dir => dir,
    };
    println!("RPC password:   {}", rpc_password);
    println!("Data dir:       {}", data_dir);
    println!("PoW limit:      0x{:08x}", profile.pow_limit_bits());
    println!("Halving every:  {} blocks", profile.subsidy_halving_interval());
    println!();
    println!("Genesis Block:");
    println!("  Hash:         {}", profile.genesis_hash());
    println!("  Merkle Root:  {}", genesis.header.merkle_root);
    println!("  Time:         {}", genesis.header.time);
    println!("  Bits:         0x{:08x}", genesis.header.bits);
    println!("  Nonce:        {}", genesis.header.nonce);
    println!();
    println!("Address prefixes:");
    for kind in Base58Type::ALL {
        println!("  {:<15} {}", format!("{kind:?}"), hex::encode(profile.base58_prefix(kind)));
    }
    println!();
    println!("Seeds:");
    for seed in profile.dns_seeds() {
        println!("  dns   {} ({})", seed.host, seed.name);
    }
    for seed in profile.fixed_seeds() {
        println!("  fixed {} (last seen {})", seed.addr, seed.last_seen);
    }

    Ok(ExitCode::SUCCESS)
}
