//! Named accounts, mapping human readable names to deployer addresses

use std::collections::BTreeMap;

use alloy::primitives::Address;

use crate::{constants::DEPLOYER_ACCOUNT, errors::ScriptError};

/// How a named account is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountSpec {
    /// Index in the list of loaded signers
    Index(usize),
    /// A fixed address
    Address(Address),
}

/// The named accounts configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedAccounts {
    accounts: BTreeMap<String, AccountSpec>,
}

impl Default for NamedAccounts {
    /// `deployer` is the first loaded signer
    fn default() -> Self {
        NamedAccounts::empty().with(DEPLOYER_ACCOUNT, AccountSpec::Index(0))
    }
}

impl NamedAccounts {
    /// No named accounts at all
    pub fn empty() -> Self {
        NamedAccounts {
            accounts: BTreeMap::new(),
        }
    }

    /// Register (or replace) a named account
    pub fn with(mut self, name: &str, spec: AccountSpec) -> Self {
        self.accounts.insert(name.to_string(), spec);
        self
    }

    /// Resolve the account `name` against the loaded signers
    pub fn resolve(&self, name: &str, signers: &[Address]) -> Result<Address, ScriptError> {
        match self.accounts.get(name) {
            Some(AccountSpec::Address(address)) => Ok(*address),
            Some(AccountSpec::Index(index)) => signers.get(*index).copied().ok_or_else(|| {
                ScriptError::UnknownNamedAccount(format!(
                    "{name} maps to signer #{index}, but only {} signer(s) are loaded",
                    signers.len()
                ))
            }),
            None => Err(ScriptError::UnknownNamedAccount(name.to_string())),
        }
    }

    /// Names of every configured account
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.accounts.keys().map(String::as_str)
    }
}
