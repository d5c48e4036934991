//! The registered deploy scripts, selectable by tag

use tracing::info;

use crate::{
    constants::{DEPLOYER_ACCOUNT, MERKLE_TREE_NFT_CONTRACT, MERKLE_TREE_NFT_ROOT},
    deploy::environment::{DeployEnvironment, DeployOptions, DeployResult},
    errors::ScriptError,
};

/// A deploy script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployScript {
    /// Deploys `MerkleTreeNFT` with its merkle root
    MerkleTreeNft,
}

impl DeployScript {
    /// Every script, in execution order
    pub const ALL: [DeployScript; 1] = [DeployScript::MerkleTreeNft];

    /// Unique id of the script, scripts run sorted by id
    pub fn id(&self) -> &'static str {
        match self {
            DeployScript::MerkleTreeNft => "00_deploy_merkle_tree_nft",
        }
    }

    /// Tags the script can be selected with
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            DeployScript::MerkleTreeNft => &["MerkleTreeNFT"],
        }
    }

    /// Run the script
    pub async fn run<E: DeployEnvironment>(&self, env: &E) -> Result<DeployResult, ScriptError> {
        info!("Running deploy script {}", self.id());
        match self {
            DeployScript::MerkleTreeNft => deploy_merkle_tree_nft(env).await,
        }
    }
}

/// Select the scripts carrying any of the `tags`, every script when no tag is given
pub fn select_scripts(tags: &[String]) -> Result<Vec<DeployScript>, ScriptError> {
    if let Some(unknown) = tags
        .iter()
        .find(|tag| !DeployScript::ALL.iter().any(|s| s.tags().contains(&tag.as_str())))
    {
        return Err(ScriptError::UnknownTag(unknown.clone()));
    }

    Ok(DeployScript::ALL
        .into_iter()
        .filter(|script| {
            tags.is_empty() || script.tags().iter().any(|t| tags.iter().any(|tag| tag == t))
        })
        .collect())
}

/// Deploy `MerkleTreeNFT` from the deployer account
async fn deploy_merkle_tree_nft<E: DeployEnvironment>(
    env: &E,
) -> Result<DeployResult, ScriptError> {
    let deployer = env.named_account(DEPLOYER_ACCOUNT)?;

    env.deploy(
        MERKLE_TREE_NFT_CONTRACT,
        DeployOptions {
            from: deployer,
            args: vec![MERKLE_TREE_NFT_ROOT.to_string()],
            log: true,
            // No effect on live networks
            auto_mine: true,
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use alloy::primitives::{address, Address, TxHash};

    use super::*;
    use crate::deploy::accounts::NamedAccounts;

    const DEPLOYER: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

    /// Records every deploy call instead of sending anything
    struct RecordingEnvironment {
        accounts: NamedAccounts,
        calls: Mutex<Vec<(String, DeployOptions)>>,
    }

    impl RecordingEnvironment {
        fn new(accounts: NamedAccounts) -> Self {
            RecordingEnvironment {
                accounts,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl DeployEnvironment for RecordingEnvironment {
        fn named_account(&self, name: &str) -> Result<Address, ScriptError> {
            self.accounts.resolve(name, &[DEPLOYER])
        }

        async fn deploy(
            &self,
            name: &str,
            options: DeployOptions,
        ) -> Result<DeployResult, ScriptError> {
            let from = options.from;
            self.calls.lock().unwrap().push((name.to_string(), options));

            Ok(DeployResult {
                contract_name: name.to_string(),
                address: from.create(0),
                transaction_hash: TxHash::ZERO,
                block_number: Some(1),
                gas_used: 21_000,
            })
        }
    }

    #[tokio::test]
    async fn deploys_merkle_tree_nft_once() {
        let env = RecordingEnvironment::new(NamedAccounts::default());

        let result = DeployScript::MerkleTreeNft.run(&env).await.unwrap();

        let calls = env.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (name, options) = &calls[0];
        assert_eq!(name, "MerkleTreeNFT");
        assert_eq!(
            options,
            &DeployOptions {
                from: DEPLOYER,
                args: vec![
                    "0xeb45664ddffb072f8231448e32d46516bff19173f711ae11383142abab4d415f"
                        .to_string()
                ],
                log: true,
                auto_mine: true,
            }
        );
        assert_eq!(result.contract_name, "MerkleTreeNFT");
        assert_eq!(result.address, DEPLOYER.create(0));
    }

    #[tokio::test]
    async fn missing_deployer_deploys_nothing() {
        let env = RecordingEnvironment::new(NamedAccounts::empty());

        let err = DeployScript::MerkleTreeNft.run(&env).await.unwrap_err();

        assert_eq!(err, ScriptError::UnknownNamedAccount("deployer".to_string()));
        assert!(env.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn selects_by_tag() {
        assert_eq!(select_scripts(&[]).unwrap(), vec![DeployScript::MerkleTreeNft]);
        assert_eq!(
            select_scripts(&["MerkleTreeNFT".to_string()]).unwrap(),
            vec![DeployScript::MerkleTreeNft]
        );
        assert_eq!(
            select_scripts(&["MerkleTreeNFT".to_string(), "Nope".to_string()]),
            Err(ScriptError::UnknownTag("Nope".to_string()))
        );
    }

    #[test]
    fn scripts_are_sorted_by_id() {
        let ids: Vec<_> = DeployScript::ALL.iter().map(DeployScript::id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
