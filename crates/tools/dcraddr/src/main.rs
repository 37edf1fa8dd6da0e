//! Command line tool for inspecting and building Decred addresses
//!
//! Supports:
//! - Decoding an address and printing its scripts
//! - Building pay-to-pubkey and pay-to-pubkey-hash addresses from a key
//! - Building pay-to-script-hash addresses from a redeem script

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use dcr_params::{AddressPrefixes, Network, NetworkType};
use dcr_stdaddr::{
    decode_address, decode_address_v0, Address, AddressParams, SCRIPT_VERSION_V0,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "dcraddr")]
#[command(about = "Decred address encoder and decoder", long_about = None)]
struct Cli {
    /// Network whose address prefixes are used
    #[arg(short, long, global = true, default_value = "mainnet")]
    network: NetworkType,

    /// JSON file with a custom prefix table, overrides --network
    #[arg(short, long, global = true)]
    params: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an address and print its scripts
    Decode {
        /// Address to decode
        address: String,

        /// Report version 0 decode errors in detail
        #[arg(short, long)]
        detailed: bool,

        /// Amount in atoms for the reward commitment script
        #[arg(long, default_value = "0")]
        amount: i64,

        /// Fee limits for the reward commitment script
        #[arg(long, default_value = "0")]
        fee_limits: u16,
    },

    /// Build an address paying to a public key
    Pubkey {
        /// Serialized public key in hex
        pubkey: String,

        /// Signature algorithm
        #[arg(short, long, value_enum, default_value = "ecdsa")]
        algo: Algo,

        /// Output the pay-to-pubkey-hash address instead
        #[arg(long)]
        hash: bool,
    },

    /// Build a pay-to-script-hash address from a redeem script
    ScriptHash {
        /// Redeem script in hex
        script: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Algo {
    Ecdsa,
    Ed25519,
    Schnorr,
}

#[derive(Serialize)]
struct StakeScripts {
    voting_rights: String,
    reward_commitment: String,
    stake_change: String,
    vote_commitment: String,
    revoke_commitment: String,
    pay_from_treasury: String,
}

#[derive(Serialize)]
struct AddressReport {
    address: String,
    kind: String,
    script_version: u16,
    payment_script: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hash160: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stake_scripts: Option<StakeScripts>,
}

impl AddressReport {
    fn new(addr: &Address, amount: i64, fee_limits: u16) -> Self {
        let (script_version, payment_script) = addr.payment_script();
        let stake_scripts = addr.as_stake_address().map(|stake| StakeScripts {
            voting_rights: hex::encode(stake.voting_rights_script().1),
            reward_commitment: hex::encode(stake.reward_commitment_script(amount, fee_limits).1),
            stake_change: hex::encode(stake.stake_change_script().1),
            vote_commitment: hex::encode(stake.pay_vote_commitment_script().1),
            revoke_commitment: hex::encode(stake.pay_revoke_commitment_script().1),
            pay_from_treasury: hex::encode(stake.pay_from_treasury_script().1),
        });

        Self {
            address: addr.address(),
            kind: addr.kind().to_string(),
            script_version,
            payment_script: hex::encode(payment_script),
            hash160: addr.hash160().map(hex::encode),
            stake_scripts,
        }
    }
}

fn load_params(cli: &Cli) -> anyhow::Result<Box<dyn AddressParams>> {
    match &cli.params {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let prefixes = AddressPrefixes::from_json(&json)
                .with_context(|| format!("Invalid prefix table in {}", path.display()))?;
            info!("Using custom prefixes from {}", path.display());
            Ok(Box::new(prefixes))
        }
        None => {
            let network = Network::from_type(cli.network);
            debug!("Using {} prefixes", network.name);
            Ok(Box::new(network))
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let params = load_params(&cli)?;

    let report = match cli.command {
        Commands::Decode {
            address,
            detailed,
            amount,
            fee_limits,
        } => {
            let decoded = if detailed {
                decode_address_v0(&address, params.as_ref())
            } else {
                decode_address(&address, params.as_ref())
            };
            let addr = decoded.with_context(|| format!("Failed to decode {}", address))?;
            AddressReport::new(&addr, amount, fee_limits)
        }
        Commands::Pubkey { pubkey, algo, hash } => {
            let addr = pubkey_address(&pubkey, algo, params.as_ref())?;
            let addr = if hash {
                addr.address_pubkey_hash()
                    .context("Pay-to-pubkey address has no pubkey hash form")?
            } else {
                addr
            };
            AddressReport::new(&addr, 0, 0)
        }
        Commands::ScriptHash { script } => {
            let script = hex::decode(&script).context("Redeem script is not valid hex")?;
            let addr = Address::script_hash(SCRIPT_VERSION_V0, &script, params.as_ref())?;
            AddressReport::new(&addr, 0, 0)
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn pubkey_address(
    pubkey_hex: &str,
    algo: Algo,
    params: &dyn AddressParams,
) -> anyhow::Result<Address> {
    let pubkey = hex::decode(pubkey_hex).context("Public key is not valid hex")?;
    let addr = match algo {
        Algo::Ecdsa => Address::pubkey_ecdsa_secp256k1_raw(SCRIPT_VERSION_V0, &pubkey, params),
        Algo::Ed25519 => Address::pubkey_ed25519_raw(SCRIPT_VERSION_V0, &pubkey, params),
        Algo::Schnorr => Address::pubkey_schnorr_secp256k1_raw(SCRIPT_VERSION_V0, &pubkey, params),
    };
    addr.with_context(|| format!("Failed to build address for key {}", pubkey_hex))
}
