use std::{env, fmt};

use alloy::{
    network::{Ethereum, EthereumWallet},
    primitives::Address,
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, Provider, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::info;

use crate::{
    constants::{DEFAULT_LOCAL_PRIVATE_KEY, DEFAULT_RPC, PRIVATE_KEY_ENV, RPC_URL_ENV},
    errors::ScriptError,
};

/// Re-export from alloy recommend filter
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// An alloy provider that uses a `PrivateKeySigner` wallet to generate signatures
/// & interfaces with the RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Where to connect, and who signs
#[derive(Clone)]
pub struct ClientConfig {
    /// The RPC endpoint
    pub rpc_url: Url,
    /// The deployer signer
    pub signer: PrivateKeySigner,
}

impl ClientConfig {
    /// Resolve the config from the CLI values, falling back to the environment
    /// and then to the local node defaults
    pub fn resolve(
        priv_key: Option<String>,
        rpc_url: Option<String>,
    ) -> Result<ClientConfig, ScriptError> {
        ClientConfig::resolve_with(priv_key, rpc_url, |key| env::var(key).ok())
    }

    /// Resolve the config, reading the environment through `env_lookup`
    fn resolve_with(
        priv_key: Option<String>,
        rpc_url: Option<String>,
        env_lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ClientConfig, ScriptError> {
        let priv_key = priv_key.or_else(|| non_empty(env_lookup(PRIVATE_KEY_ENV)));
        let rpc_url = rpc_url.or_else(|| non_empty(env_lookup(RPC_URL_ENV)));

        ClientConfig::from_parts(priv_key.as_deref(), rpc_url.as_deref())
    }

    /// Build the config from already resolved values
    pub fn from_parts(
        priv_key: Option<&str>,
        rpc_url: Option<&str>,
    ) -> Result<ClientConfig, ScriptError> {
        // Accepts keys with or without the 0x prefix
        let signer = priv_key
            .unwrap_or(DEFAULT_LOCAL_PRIVATE_KEY)
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|e| ScriptError::ClientInitialization(format!("invalid private key: {e}")))?;

        let rpc_url = rpc_url
            .unwrap_or(DEFAULT_RPC)
            .parse::<Url>()
            .map_err(|e| ScriptError::ClientInitialization(format!("invalid rpc url: {e}")))?;

        Ok(ClientConfig { rpc_url, signer })
    }

    /// Addresses of the loaded signers, in named account index order
    pub fn signer_addresses(&self) -> Vec<Address> {
        vec![self.signer.address()]
    }
}

impl fmt::Debug for ClientConfig {
    /// Never prints the private key
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("signer", &self.signer.address())
            .finish()
    }
}

/// Treat an empty env value as unset
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

/// Build our RPC client, with the deployer signer attached
pub async fn create_rpc_provider(config: &ClientConfig) -> Result<RpcProvider, ScriptError> {
    let wallet = EthereumWallet::from(config.signer.clone());

    // Create our provider with the rpc client + signer
    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(config.rpc_url.clone());

    // Fetch chain id, also ensuring the node is reachable
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))?;

    info!("Build client on chain ID: {}", chain_id);

    Ok(provider)
}
