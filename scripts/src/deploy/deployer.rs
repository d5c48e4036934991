//! Deployments through a live RPC node

use alloy::primitives::{Address, TxHash};
use tracing::{info, warn};

use crate::{
    deploy::{
        accounts::NamedAccounts,
        artifacts::ArtifactStore,
        environment::{DeployEnvironment, DeployOptions, DeployResult},
    },
    errors::ScriptError,
    tx::{
        client::RpcProvider,
        reader::{get_code, get_nonce},
        sender::send_deploy_transaction,
    },
    utils::predict_contract_address,
};

/// Deploy environment backed by a live RPC node
pub struct RpcDeployEnvironment {
    /// Our signing RPC client
    client: RpcProvider,
    /// Where compiled contracts are looked up
    artifacts: ArtifactStore,
    /// Named accounts configuration
    accounts: NamedAccounts,
    /// Addresses of the signers attached to the client
    signers: Vec<Address>,
}

impl RpcDeployEnvironment {
    /// Build a new deploy environment
    pub fn new(
        client: RpcProvider,
        artifacts: ArtifactStore,
        accounts: NamedAccounts,
        signers: Vec<Address>,
    ) -> Self {
        RpcDeployEnvironment {
            client,
            artifacts,
            accounts,
            signers,
        }
    }

    /// The underlying client
    pub fn client(&self) -> &RpcProvider {
        &self.client
    }
}

impl DeployEnvironment for RpcDeployEnvironment {
    fn named_account(&self, name: &str) -> Result<Address, ScriptError> {
        self.accounts.resolve(name, &self.signers)
    }

    async fn deploy(
        &self,
        name: &str,
        options: DeployOptions,
    ) -> Result<DeployResult, ScriptError> {
        ensure_signer(options.from, &self.signers)?;

        // Build the creation code
        let artifact = self.artifacts.load(name)?;
        let init_code = artifact.init_code(&options.args)?;

        // Predict the contract address
        let nonce = get_nonce(&self.client, options.from).await?;
        let predicted = predict_contract_address(options.from, nonce);

        let receipt = send_deploy_transaction(
            &self.client,
            options.from,
            init_code,
            options.log.then_some(name),
            options.auto_mine,
        )
        .await?;

        let address = deployed_address(
            name,
            receipt.transaction_hash,
            receipt.status(),
            receipt.contract_address,
        )?;
        if address != predicted {
            warn!(
                "{} deployed at {} instead of the predicted {}",
                name, address, predicted
            );
        }
        if get_code(&self.client, address).await?.is_empty() {
            warn!("No code found at {} right after the deployment", address);
        }

        if options.log {
            info!(
                "deployed \"{}\" at {} with {} gas",
                name, address, receipt.gas_used
            );
        }

        Ok(DeployResult {
            contract_name: name.to_string(),
            address,
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        })
    }
}

/// Only accounts with a loaded signer can send the creation transaction
fn ensure_signer(from: Address, signers: &[Address]) -> Result<(), ScriptError> {
    if signers.contains(&from) {
        Ok(())
    } else {
        Err(ScriptError::ContractDeployment(format!(
            "no signer loaded for {from}"
        )))
    }
}

/// The contract address of a successful creation receipt
fn deployed_address(
    name: &str,
    transaction_hash: TxHash,
    status: bool,
    contract_address: Option<Address>,
) -> Result<Address, ScriptError> {
    if !status {
        return Err(ScriptError::ContractDeployment(format!(
            "{name} creation reverted (tx: {transaction_hash})"
        )));
    }
    contract_address.ok_or_else(|| {
        ScriptError::ContractDeployment(format!(
            "no contract address in the receipt of {transaction_hash}"
        ))
    })
}
