//! Definitions of CLI arguments and commands for the contract tasks

use std::{io, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::{deploy, mint},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_DEPLOY_CONTRACT, DEFAULT_GATEWAY, DEFAULT_MINT_CONTRACT,
        DEFAULT_NETWORK, DEFAULT_SYSTEM_CONTRACT,
    },
    errors::ScriptError,
    extractor::EventArgExtractor,
    runtime::Runtime,
};

/// Tasks for deploying the swap contract & minting tokens
#[derive(Parser)]
#[command(name = "contract-tasks", version)]
pub struct Cli {
    /// Network to run against
    #[arg(short, long, env = "NETWORK", default_value = DEFAULT_NETWORK, global = true)]
    pub network: String,

    /// Network RPC URL, overrides the one of the network
    #[arg(short, long, env = "RPC_URL", global = true)]
    pub rpc_url: Option<String>,

    /// Private key of the signer
    #[arg(short, long, env = "PRIVATE_KEY", hide_env_values = true, global = true)]
    pub private_key: Option<String>,

    /// Directory holding the compiled contract artifacts
    #[arg(long, env = "ARTIFACTS_DIR", default_value = DEFAULT_ARTIFACTS_DIR, global = true)]
    pub artifacts: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the contract
    Deploy(DeployArgs),
    /// Mint an NFT
    Mint(MintArgs),
}

impl Command {
    /// Run the command, printing its result to stdout
    pub async fn run(self, runtime: &dyn Runtime) -> Result<(), ScriptError> {
        let mut stdout = io::stdout();
        match self {
            Command::Deploy(args) => {
                info!("Deploying {} on {}...", args.name, runtime.network_name());
                deploy(&args, runtime, &mut stdout).await?;
            }
            Command::Mint(args) => {
                info!("Minting on {}...", args.contract);
                mint(&args, runtime, &EventArgExtractor::default(), &mut stdout).await?;
            }
        }

        Ok(())
    }
}

/// Deploy a contract taking a system contract and a gateway
#[derive(Args, Clone, Debug)]
pub struct DeployArgs {
    /// Output in JSON
    #[arg(long)]
    pub json: bool,

    /// Contract to deploy
    #[arg(long, default_value = DEFAULT_DEPLOY_CONTRACT)]
    pub name: String,

    /// System contract
    #[arg(long, default_value = DEFAULT_SYSTEM_CONTRACT)]
    pub system_contract: String,

    /// Gateway address (default: ZetaChain Gateway)
    #[arg(long, default_value = DEFAULT_GATEWAY)]
    pub gateway: String,
}

/// Mint tokens on a deployed contract
#[derive(Args, Clone, Debug)]
pub struct MintArgs {
    /// The address of the deployed NFT contract
    #[arg(long)]
    pub contract: String,

    /// The recipient address, defaults to the signer address
    #[arg(long)]
    pub to: Option<String>,

    /// The amount of tokens to mint
    #[arg(long)]
    pub amount: String,

    /// The contract name to interact with
    #[arg(long, default_value = DEFAULT_MINT_CONTRACT)]
    pub name: String,

    /// Token URI, echoed in the JSON output
    #[arg(long)]
    pub token_uri: Option<String>,

    /// Fail when the receipt carries no token id
    #[arg(long)]
    pub require_token_id: bool,

    /// Output the result in JSON format
    #[arg(long)]
    pub json: bool,
}
