//! The runtime environment handed to every deploy script

use alloy::primitives::{Address, TxHash};

use crate::errors::ScriptError;

/// Options of a single contract deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions {
    /// Account paying for, and signing, the deployment
    pub from: Address,
    /// Constructor arguments, coerced to the constructor ABI types
    pub args: Vec<String>,
    /// Log the deployment progress
    pub log: bool,
    /// Mine a block right after sending, for local nodes
    pub auto_mine: bool,
}

/// Outcome of a contract deployment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployResult {
    /// Name of the deployed contract
    pub contract_name: String,
    /// Address the contract lives at
    pub address: Address,
    /// Hash of the creation transaction
    pub transaction_hash: TxHash,
    /// Block that included the creation transaction
    pub block_number: Option<u64>,
    /// Gas spent by the creation transaction
    pub gas_used: u128,
}

/// What a deploy script can do: resolve named accounts and deploy contracts
#[allow(async_fn_in_trait)]
pub trait DeployEnvironment {
    /// Resolve a named account (e.g. `deployer`) to its address
    fn named_account(&self, name: &str) -> Result<Address, ScriptError>;

    /// Deploy the contract `name` with the given options
    async fn deploy(&self, name: &str, options: DeployOptions)
        -> Result<DeployResult, ScriptError>;
}
