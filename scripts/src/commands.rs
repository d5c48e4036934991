//! Implementation of the CLI commands

use alloy::primitives::{utils::format_ether, Address};
use tracing::{info, warn};

use crate::{
    cli::{DeployArgs, PredictAddressArgs},
    constants::DEPLOYER_ACCOUNT,
    deploy::{
        accounts::NamedAccounts,
        artifacts::ArtifactStore,
        deployer::RpcDeployEnvironment,
        environment::{DeployEnvironment, DeployResult},
        scripts::{select_scripts, DeployScript},
    },
    errors::ScriptError,
    tx::{
        client::{create_rpc_provider, ClientConfig},
        reader::{get_balance, get_nonce},
    },
    utils::predict_contract_address,
};

/// Run the deploy scripts selected by the given tags
pub async fn deploy(
    args: DeployArgs,
    config: &ClientConfig,
) -> Result<Vec<DeployResult>, ScriptError> {
    // Fail on unknown tags before touching the network
    let scripts = select_scripts(&args.tags)?;

    let client = create_rpc_provider(config).await?;
    let env = RpcDeployEnvironment::new(
        client,
        ArtifactStore::new(args.artifacts),
        NamedAccounts::default(),
        config.signer_addresses(),
    );

    // Check the deployer can pay for the deployments
    let deployer = env.named_account(DEPLOYER_ACCOUNT)?;
    let balance = get_balance(env.client(), deployer).await?;
    if balance.is_zero() {
        warn!("Deployer {} has no funds, the deployment will likely fail", deployer);
    } else {
        info!("Deployer {} balance: {} ETH", deployer, format_ether(balance));
    }

    let mut results = Vec::with_capacity(scripts.len());
    for script in scripts {
        results.push(script.run(&env).await?);
    }

    for result in &results {
        println!(
            "{}: {} (tx: {})",
            result.contract_name, result.address, result.transaction_hash
        );
    }

    Ok(results)
}

/// One line per deploy script with its tags, then the named accounts
pub fn list_scripts() -> Vec<String> {
    let accounts = NamedAccounts::default();

    DeployScript::ALL
        .iter()
        .map(|script| format!("{} [{}]", script.id(), script.tags().join(", ")))
        .chain([format!(
            "named accounts: {}",
            accounts.names().collect::<Vec<_>>().join(", ")
        )])
        .collect()
}

/// Predict the address of the next contract deployed by the named account
pub async fn predict_address(
    args: PredictAddressArgs,
    config: &ClientConfig,
) -> Result<Address, ScriptError> {
    let account =
        NamedAccounts::default().resolve(&args.account, &config.signer_addresses())?;

    let client = create_rpc_provider(config).await?;
    let nonce = get_nonce(&client, account).await?;
    info!("{} ({}) is at nonce {}", args.account, account, nonce);

    Ok(predict_contract_address(account, nonce))
}
