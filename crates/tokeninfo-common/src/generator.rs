use crate::{
    chains::{ChainDescriptor, ChainRegistry, ChainSelector},
    reader::{RpcEndpoint, RpcTokenReader, TokenReader},
    types::{TokenInfoError, TokenRecord},
    writer::{TokenWriter, WrittenPaths, DEFAULT_OUTPUT_DIR},
};
use alloy::primitives::Address;
use std::path::PathBuf;
use tracing::{debug, info};

/// Everything a caller can tell the generator about one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfoInput {
    pub address: String,
    pub chain: ChainSelector,
    pub rpc_url: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub explorer: Option<String>,
    pub logo: Option<PathBuf>,
}

impl TokenInfoInput {
    pub fn new(address: impl Into<String>, chain: ChainSelector) -> Self {
        Self {
            address: address.into(),
            chain,
            rpc_url: None,
            website: None,
            description: None,
            explorer: None,
            logo: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub output_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// A validated input. Building one never touches the network or the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedJob {
    pub address: Address,
    pub endpoint: RpcEndpoint,
    pub website: Option<String>,
    pub description: Option<String>,
    pub explorer: Option<String>,
    pub logo: Option<PathBuf>,
}

impl PreparedJob {
    pub fn chain(&self) -> &ChainDescriptor {
        &self.endpoint.chain
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedToken {
    pub chain: ChainDescriptor,
    pub record: TokenRecord,
    pub paths: WrittenPaths,
}

pub struct TokenInfoGenerator<'a> {
    registry: &'a ChainRegistry,
    writer: TokenWriter,
}

impl<'a> TokenInfoGenerator<'a> {
    pub fn new(registry: &'a ChainRegistry, options: &GenerateOptions) -> Self {
        Self {
            registry,
            writer: TokenWriter::new(&options.output_dir),
        }
    }

    pub fn prepare(&self, input: TokenInfoInput) -> Result<PreparedJob, TokenInfoError> {
        let address = parse_token_address(&input.address)?;

        if let Some(logo) = &input.logo {
            if !logo.is_file() {
                return Err(TokenInfoError::MissingLogo(logo.clone()));
            }
        }

        let chain = self.registry.resolve(&input.chain)?.clone();
        let endpoint = RpcEndpoint::new(chain, input.rpc_url.as_deref())?;
        debug!(
            %address,
            chain = %endpoint.chain.internal_name,
            chain_id = endpoint.chain.id,
            rpc_url = %endpoint.url,
            "token info job prepared"
        );

        Ok(PreparedJob {
            address,
            endpoint,
            website: input.website,
            description: input.description,
            explorer: input.explorer,
            logo: input.logo,
        })
    }

    /// Reads the token and writes its files. The output tree is only touched once
    /// all three reads have succeeded.
    pub async fn run(
        &self,
        job: &PreparedJob,
        reader: &dyn TokenReader,
    ) -> Result<GeneratedToken, TokenInfoError> {
        let onchain = reader.read_token(job.address).await?;

        let record = TokenRecord::new(job.address, onchain).with_links(
            job.website.clone(),
            job.description.clone(),
            job.explorer.clone(),
        );
        let paths = self
            .writer
            .write(job.chain().id, &record, job.logo.as_deref())?;
        info!(
            chain_id = job.chain().id,
            address = %record.address,
            name = %record.name,
            symbol = %record.symbol,
            decimals = record.decimals,
            "token info generated"
        );

        Ok(GeneratedToken {
            chain: job.chain().clone(),
            record,
            paths,
        })
    }
}

/// Prepares the job, connects to the chain over HTTP and writes the token files.
pub async fn create_token_info(
    registry: &ChainRegistry,
    input: TokenInfoInput,
    options: &GenerateOptions,
) -> Result<GeneratedToken, TokenInfoError> {
    let generator = TokenInfoGenerator::new(registry, options);
    let job = generator.prepare(input)?;
    let reader = RpcTokenReader::connect(&job.endpoint);
    generator.run(&job, &reader).await
}

/// Accepts lowercase, uppercase or correctly checksummed hex. Mixed case must be a
/// valid EIP-55 checksum.
pub fn parse_token_address(input: &str) -> Result<Address, TokenInfoError> {
    let trimmed = input.trim();
    let invalid = |reason: &str| TokenInfoError::InvalidAddress {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let address = trimmed
        .parse::<Address>()
        .map_err(|e| invalid(&e.to_string()))?;

    let digits = if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
        trimmed.get(2..).unwrap_or_default()
    } else {
        trimmed
    };
    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper && address.to_checksum(None) != format!("0x{digits}") {
        return Err(invalid("bad EIP-55 checksum"));
    }

    Ok(address)
}
