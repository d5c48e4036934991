//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::{deploy, list_scripts, predict_address},
    constants::{DEFAULT_ARTIFACTS_DIR, DEPLOYER_ACCOUNT},
    errors::ScriptError,
    tx::client::ClientConfig,
};

/// Scripts for deploying the MerkleTreeNFT contract
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer, defaults to `DEPLOYER_PRIVATE_KEY`
    #[arg(short, long)]
    pub priv_key: Option<String>,

    /// Network RPC URL, defaults to `RPC_URL` or a local node
    #[arg(short, long)]
    pub rpc_url: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Run the deploy scripts
    Deploy(DeployArgs),
    /// List the deploy scripts and the named accounts
    List,
    /// Print the address the next deployment of an account will land on
    PredictAddress(PredictAddressArgs),
}

impl Command {
    /// Run the command
    pub async fn run(
        self,
        priv_key: Option<String>,
        rpc_url: Option<String>,
    ) -> Result<(), ScriptError> {
        match self {
            Command::Deploy(args) => {
                info!("Deploying contracts...");
                let config = ClientConfig::resolve(priv_key, rpc_url)?;
                deploy(args, &config).await?;
                Ok(())
            }
            Command::List => {
                for line in list_scripts() {
                    println!("{line}");
                }
                Ok(())
            }
            Command::PredictAddress(args) => {
                let config = ClientConfig::resolve(priv_key, rpc_url)?;
                let address = predict_address(args, &config).await?;
                println!("{address}");
                Ok(())
            }
        }
    }
}

/// Run the deploy scripts
#[derive(Args)]
pub struct DeployArgs {
    /// Only run the scripts carrying one of these tags
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,
}

/// Predict a deployment address
#[derive(Args)]
pub struct PredictAddressArgs {
    /// Named account doing the deployment
    #[arg(short, long, default_value = DEPLOYER_ACCOUNT)]
    pub account: String,
}
