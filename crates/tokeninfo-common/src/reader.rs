use crate::{
    chains::ChainDescriptor,
    types::{OnchainToken, TokenInfoError},
};
use alloy::{
    network::Ethereum,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    sol,
};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

pub const DEFAULT_RPC_BASE: &str = "https://venn.staging.gfx.town";

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IERC20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
    }
}

/// Source of on-chain token metadata.
#[async_trait]
pub trait TokenReader: Send + Sync {
    async fn read_token(&self, address: Address) -> Result<OnchainToken, TokenInfoError>;
}

/// Resolved chain plus the JSON-RPC url used to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcEndpoint {
    pub chain: ChainDescriptor,
    pub url: Url,
}

impl RpcEndpoint {
    /// Uses `rpc_url` when given, otherwise the gateway url for the chain's internal name.
    pub fn new(chain: ChainDescriptor, rpc_url: Option<&str>) -> Result<Self, TokenInfoError> {
        let raw = match rpc_url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => url.to_string(),
            None => Self::default_url(&chain),
        };
        let url = Url::parse(&raw).map_err(|source| TokenInfoError::InvalidRpcUrl {
            input: raw.clone(),
            source,
        })?;
        Ok(Self { chain, url })
    }

    pub fn default_url(chain: &ChainDescriptor) -> String {
        format!("{DEFAULT_RPC_BASE}/{}", chain.internal_name)
    }
}

/// Reads ERC20 metadata through an alloy provider.
pub struct RpcTokenReader {
    provider: DynProvider<Ethereum>,
}

impl RpcTokenReader {
    pub fn new(provider: DynProvider<Ethereum>) -> Self {
        Self { provider }
    }

    /// Builds an HTTP provider for the endpoint. Nothing is sent until the first read.
    pub fn connect(endpoint: &RpcEndpoint) -> Self {
        debug!(chain_id = endpoint.chain.id, url = %endpoint.url, "building http provider");
        let provider = ProviderBuilder::new()
            .connect_http(endpoint.url.clone())
            .erased();
        Self::new(provider)
    }
}

#[async_trait]
impl TokenReader for RpcTokenReader {
    async fn read_token(&self, address: Address) -> Result<OnchainToken, TokenInfoError> {
        let contract = IERC20::new(address, self.provider.clone());

        let name = async {
            contract
                .name()
                .call()
                .await
                .map_err(|e| rpc_error("name", address, e))
        };
        let symbol = async {
            contract
                .symbol()
                .call()
                .await
                .map_err(|e| rpc_error("symbol", address, e))
        };
        let decimals = async {
            contract
                .decimals()
                .call()
                .await
                .map_err(|e| rpc_error("decimals", address, e))
        };

        let (name, symbol, decimals) = tokio::try_join!(name, symbol, decimals)?;
        debug!(%address, %name, %symbol, decimals, "token metadata read");

        Ok(OnchainToken {
            name,
            symbol,
            decimals,
        })
    }
}

fn rpc_error(method: &'static str, address: Address, err: alloy::contract::Error) -> TokenInfoError {
    TokenInfoError::Rpc {
        method,
        address,
        source: Box::new(err),
    }
}
