//! Definitions of errors that can occur during the execution of the deploy scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Error when creating the client
    ClientInitialization(String),
    /// Error when fetching the nonce to deploy a contract
    NonceFetching(String),
    /// Error when locating or decoding a compiled contract artifact
    ArtifactLoading(String),
    /// Error encoding the constructor arguments of a contract
    ConstructorEncoding(String),
    /// A named account that isn't configured, or doesn't map to a signer
    UnknownNamedAccount(String),
    /// A tag that no deploy script carries
    UnknownTag(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error reading from or sending to the chain
    ContractInteraction(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error during client init: {}", s),
            ScriptError::NonceFetching(s) => {
                write!(f, "error during nonce fetching for client signing: {}", s)
            }
            ScriptError::ArtifactLoading(s) => write!(f, "error loading contract artifact: {}", s),
            ScriptError::ConstructorEncoding(s) => {
                write!(f, "error encoding constructor arguments: {}", s)
            }
            ScriptError::UnknownNamedAccount(s) => write!(f, "unknown named account: {}", s),
            ScriptError::UnknownTag(s) => write!(f, "no deploy script is tagged {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
        }
    }
}

impl Error for ScriptError {}
