use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum TokenInfoError {
    #[error("Chain '{0}' not found")]
    UnknownChain(String),

    #[error("Invalid token address '{input}': {reason}")]
    InvalidAddress { input: String, reason: String },

    #[error("Invalid RPC url '{input}': {source}")]
    InvalidRpcUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Logo file does not exist: {}", .0.display())]
    MissingLogo(PathBuf),

    #[error("Failed to read token {address} via {method}(): {source}")]
    Rpc {
        method: &'static str,
        address: Address,
        #[source]
        source: BoxError,
    },

    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize token record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TokenInfoError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Metadata as returned by the token contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnchainToken {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Contents of `info.json`. Optional fields are left out of the file when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer: Option<String>,
}

impl TokenRecord {
    pub fn new(address: Address, token: OnchainToken) -> Self {
        Self {
            address: address.to_checksum(None),
            name: token.name,
            symbol: token.symbol,
            decimals: u32::from(token.decimals),
            website: None,
            description: None,
            explorer: None,
        }
    }

    pub fn with_links(
        mut self,
        website: Option<String>,
        description: Option<String>,
        explorer: Option<String>,
    ) -> Self {
        self.website = non_empty(website);
        self.description = non_empty(description);
        self.explorer = non_empty(explorer);
        self
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> OnchainToken {
        OnchainToken {
            name: "Wrapped Ether".to_string(),
            symbol: "WETH".to_string(),
            decimals: 18,
        }
    }

    #[test]
    fn record_uses_checksummed_address() {
        let address: Address = "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2".parse().unwrap();
        let record = TokenRecord::new(address, sample());
        assert_eq!(record.address, "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
    }

    #[test]
    fn optional_fields_are_omitted_when_unset_or_empty() {
        let record = TokenRecord::new(Address::ZERO, sample()).with_links(
            Some("https://weth.io".to_string()),
            Some(String::new()),
            None,
        );
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "address": "0x0000000000000000000000000000000000000000",
                "name": "Wrapped Ether",
                "symbol": "WETH",
                "decimals": 18,
                "website": "https://weth.io",
            })
        );
    }

    #[test]
    fn decimals_serialize_as_plain_integer() {
        let record = TokenRecord::new(Address::ZERO, sample());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"decimals\":18"), "{json}");
    }
}
