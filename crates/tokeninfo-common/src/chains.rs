use crate::types::TokenInfoError;
use serde::Serialize;
use std::{convert::Infallible, fmt, str::FromStr};

/// Mainnet chains known to the generator, keyed by internal name.
const BUILTIN_CHAINS: &[(&str, u64)] = &[
    ("ethereum", 1),
    ("optimism", 10),
    ("rootstock", 30),
    ("telos", 40),
    ("xdc", 50),
    ("bsc", 56),
    ("gnosis", 100),
    ("unichain", 130),
    ("polygon", 137),
    ("sonic", 146),
    ("manta", 169),
    ("opbnb", 204),
    ("boba", 288),
    ("filecoin", 314),
    ("zksync", 324),
    ("worldchain", 480),
    ("hyperevm", 999),
    ("metis", 1088),
    ("polygon-zkevm", 1101),
    ("lisk", 1135),
    ("moonbeam", 1284),
    ("sei", 1329),
    ("lightlink", 1890),
    ("mantle", 5000),
    ("saga", 5464),
    ("base", 8453),
    ("mode", 34443),
    ("arbitrum", 42161),
    ("celo", 42220),
    ("etherlink", 42793),
    ("hemi", 43111),
    ("avalanche", 43114),
    ("ink", 57073),
    ("linea", 59144),
    ("bob", 60808),
    ("berachain", 80094),
    ("blast", 81457),
    ("taiko", 167000),
    ("scroll", 534352),
    ("zora", 7777777),
    ("corn", 21000000),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainDescriptor {
    pub internal_name: String,
    pub id: u64,
}

impl ChainDescriptor {
    pub fn new(internal_name: impl Into<String>, id: u64) -> Self {
        Self {
            internal_name: internal_name.into(),
            id,
        }
    }
}

/// How a caller refers to a chain on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainSelector {
    Id(u64),
    Name(String),
}

impl FromStr for ChainSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<u64>() {
            Ok(id) => ChainSelector::Id(id),
            Err(_) => ChainSelector::Name(s.to_string()),
        })
    }
}

impl fmt::Display for ChainSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainSelector::Id(id) => write!(f, "{id}"),
            ChainSelector::Name(name) => f.write_str(name),
        }
    }
}

/// Immutable chain table. Built once at startup and handed to whoever needs it.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: Vec<ChainDescriptor>,
}

impl ChainRegistry {
    pub fn new(chains: Vec<ChainDescriptor>) -> Self {
        Self { chains }
    }

    pub fn builtin() -> Self {
        Self::new(
            BUILTIN_CHAINS
                .iter()
                .map(|(name, id)| ChainDescriptor::new(*name, *id))
                .collect(),
        )
    }

    pub fn by_name(&self, internal_name: &str) -> Option<&ChainDescriptor> {
        self.chains.iter().find(|c| c.internal_name == internal_name)
    }

    pub fn by_id(&self, id: u64) -> Option<&ChainDescriptor> {
        self.chains.iter().find(|c| c.id == id)
    }

    pub fn resolve(&self, selector: &ChainSelector) -> Result<&ChainDescriptor, TokenInfoError> {
        let found = match selector {
            ChainSelector::Id(id) => self.by_id(*id),
            ChainSelector::Name(name) => self.by_name(name),
        };
        found.ok_or_else(|| TokenInfoError::UnknownChain(selector.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChainDescriptor> {
        self.chains.iter()
    }
}
