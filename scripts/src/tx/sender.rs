use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, U256},
    providers::Provider,
    rpc::types::eth::{TransactionReceipt, TransactionRequest},
};
use tracing::{debug, info};

use crate::{errors::ScriptError, tx::client::RpcProvider};

/// Send a contract creation transaction and wait for its receipt.
///
/// When `log_as` holds the contract name, the pending transaction is logged.
/// When `auto_mine` is set, a block is mined right after sending, which only
/// has an effect on local nodes.
pub async fn send_deploy_transaction(
    client: &RpcProvider,
    from: Address,
    init_code: Bytes,
    log_as: Option<&str>,
    auto_mine: bool,
) -> Result<TransactionReceipt, ScriptError> {
    // Build the tx, gas / nonce / chain id are filled by the provider
    let tx_request = TransactionRequest::default()
        .with_from(from)
        .with_deploy_code(init_code)
        .with_value(U256::from(0));

    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    match log_as {
        Some(name) => info!("deploying \"{}\" (tx: {})...", name, pending_tx.tx_hash()),
        None => debug!("Pending deploy transaction... {}", pending_tx.tx_hash()),
    }

    if auto_mine {
        mine_block(client).await;
    }

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;
    debug!("Deploy tx done on block: {:?}", receipt.block_number);

    Ok(receipt)
}

/// Ask the node to mine a block. Live networks reject `evm_mine`, which is ignored
pub async fn mine_block(client: &RpcProvider) {
    match client
        .raw_request::<_, String>("evm_mine".into(), ())
        .await
    {
        Ok(_) => debug!("Mined a block"),
        Err(e) => debug!("evm_mine not supported by the node, skipping: {}", e),
    }
}
