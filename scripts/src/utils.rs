//! Utilities for the deploy scripts.

use alloy::primitives::Address;
use ethers::{types::H160, utils::get_contract_address};

/// Predict the address a CREATE deployment from `deployer` at `nonce` lands on,
/// i.e. `keccak256(rlp([deployer, nonce]))[12..]`
pub fn predict_contract_address(deployer: Address, nonce: u64) -> Address {
    // Ethers RLP, alloy and ethers addresses share the same 20 bytes layout
    let predicted = get_contract_address(H160::from_slice(deployer.as_slice()), nonce);
    Address::from_slice(predicted.as_bytes())
}
