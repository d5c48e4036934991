//! Scripts for deploying the MerkleTreeNFT contract.

#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod constants;
pub mod errors;
pub mod utils;

/// Our deploy scripts and their runtime environment
pub mod deploy;

pub mod tx;
