//! Constants used in the deploy scripts

/// Default RPC endpoint, a local hardhat or anvil node
pub const DEFAULT_RPC: &str = "http://127.0.0.1:8545";

/// Private key of the first pre-funded account on local hardhat / anvil nodes.
///
/// Only used when no key is given through the CLI or the environment.
pub const DEFAULT_LOCAL_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Env var holding the RPC endpoint
pub const RPC_URL_ENV: &str = "RPC_URL";

/// Env var holding the deployer private key
pub const PRIVATE_KEY_ENV: &str = "DEPLOYER_PRIVATE_KEY";

/// Default directory searched for compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Name of the account paying for the deployments
pub const DEPLOYER_ACCOUNT: &str = "deployer";

/// Name of the deployed contract, as found in the compiled artifacts
pub const MERKLE_TREE_NFT_CONTRACT: &str = "MerkleTreeNFT";

/// Merkle root passed to the `MerkleTreeNFT` constructor
pub const MERKLE_TREE_NFT_ROOT: &str =
    "0xeb45664ddffb072f8231448e32d46516bff19173f711ae11383142abab4d415f";
