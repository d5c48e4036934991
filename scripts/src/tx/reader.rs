use alloy::{
    primitives::{Address, Bytes, U256},
    providers::Provider,
};

use crate::{errors::ScriptError, tx::client::RpcProvider};

/// Get the next nonce of the given account
pub async fn get_nonce(client: &RpcProvider, account: Address) -> Result<u64, ScriptError> {
    client
        .get_transaction_count(account)
        .await
        .map_err(|e| ScriptError::NonceFetching(e.to_string()))
}

/// Get the native balance of the given account
pub async fn get_balance(client: &RpcProvider, account: Address) -> Result<U256, ScriptError> {
    client
        .get_balance(account)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
}

/// Get the runtime code stored at the given address
pub async fn get_code(client: &RpcProvider, contract: Address) -> Result<Bytes, ScriptError> {
    client
        .get_code_at(contract)
        .await
        .map_err(|e| ScriptError::ContractInteraction(e.to_string()))
}
