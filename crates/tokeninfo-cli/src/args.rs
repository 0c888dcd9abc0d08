use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;
use tokeninfo_common::{ChainSelector, GenerateOptions, TokenInfoInput, DEFAULT_OUTPUT_DIR};
use tracing::warn;

#[derive(Parser, Debug)]
#[command(name = "tokeninfo")]
#[command(about = "Fetch ERC20 token metadata and write it to <output-dir>/<chain id>/<address>/", long_about = None)]
pub struct Args {
    /// Chain id or internal chain name, e.g. 1 or ethereum
    #[arg(short = 'c', long = "chain", aliases = ["chain-id", "chainId", "chain-name"])]
    pub chain: Option<String>,

    /// Token contract address
    #[arg(short = 't', long = "token-address", aliases = ["tokenAddress", "address"])]
    pub token_address: Option<String>,

    /// JSON-RPC url (defaults to the gateway url for the chain)
    #[arg(short = 'r', long = "rpc-url", alias = "rpcUrl", env = "TOKENINFO_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Logo image, copied as logo.png next to info.json
    #[arg(short = 'l', long)]
    pub logo: Option<PathBuf>,

    #[arg(long)]
    pub website: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub explorer: Option<String>,

    /// Root of the chains directory
    #[arg(short = 'o', long, env = "TOKENINFO_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Print the known chains and exit
    #[arg(long)]
    pub list_chains: bool,

    /// Deprecated positional form:
    /// <chainId> <tokenAddress> <rpcUrl> [logo] or
    /// <address> <chainName> [rpcUrl] [website] [description] [explorer]
    #[arg(value_name = "ARGS", hide = true)]
    pub positional: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    ListChains,
    Generate {
        input: TokenInfoInput,
        options: GenerateOptions,
    },
}

impl Args {
    pub fn into_invocation(self) -> Result<Invocation, clap::Error> {
        if self.list_chains {
            return Ok(Invocation::ListChains);
        }

        let options = GenerateOptions {
            output_dir: self.output_dir.clone(),
        };

        let input = if self.chain.is_none() && self.token_address.is_none() && !self.positional.is_empty() {
            self.positional_input()?
        } else {
            self.flag_input()?
        };

        Ok(Invocation::Generate { input, options })
    }

    fn flag_input(self) -> Result<TokenInfoInput, clap::Error> {
        if !self.positional.is_empty() {
            return Err(usage_error(
                ErrorKind::UnknownArgument,
                format!(
                    "unexpected positional arguments alongside flags: {}",
                    self.positional.join(" ")
                ),
            ));
        }

        let (chain, address) = match (self.chain, self.token_address) {
            (Some(chain), Some(address)) => (chain, address),
            (chain, _) => {
                let missing = if chain.is_none() { "--chain" } else { "--token-address" };
                return Err(usage_error(
                    ErrorKind::MissingRequiredArgument,
                    format!("missing required argument {missing}"),
                ));
            }
        };

        Ok(TokenInfoInput {
            address,
            chain: parse_chain(&chain)?,
            rpc_url: self.rpc_url,
            website: self.website,
            description: self.description,
            explorer: self.explorer,
            logo: self.logo,
        })
    }

    fn positional_input(self) -> Result<TokenInfoInput, clap::Error> {
        let mut args = self.positional.into_iter();
        let first = args.next().unwrap_or_default();
        let second = args.next().ok_or_else(|| {
            usage_error(
                ErrorKind::MissingRequiredArgument,
                "expected at least a chain and a token address".to_string(),
            )
        })?;

        let mut input = if looks_like_address(&first) {
            warn!("positional <address> <chainName> ... is deprecated, use --token-address and --chain");
            let mut input = TokenInfoInput::new(first, parse_chain(&second)?);
            input.rpc_url = args.next().or(self.rpc_url);
            input.website = args.next();
            input.description = args.next();
            input.explorer = args.next();
            input
        } else {
            warn!("positional <chainId> <tokenAddress> <rpcUrl> <logo> is deprecated, use flags");
            let mut input = TokenInfoInput::new(second, parse_chain(&first)?);
            input.rpc_url = args.next().or(self.rpc_url);
            input.logo = args.next().map(PathBuf::from);
            input
        };

        let extra: Vec<String> = args.collect();
        if !extra.is_empty() {
            return Err(usage_error(
                ErrorKind::TooManyValues,
                format!("unexpected extra arguments: {}", extra.join(" ")),
            ));
        }

        input.logo = input.logo.or(self.logo);
        input.website = input.website.or(self.website);
        input.description = input.description.or(self.description);
        input.explorer = input.explorer.or(self.explorer);
        Ok(input)
    }
}

fn parse_chain(raw: &str) -> Result<ChainSelector, clap::Error> {
    if raw.trim().is_empty() {
        return Err(usage_error(
            ErrorKind::InvalidValue,
            "chain must not be empty".to_string(),
        ));
    }
    raw.parse::<ChainSelector>()
        .map_err(|_| usage_error(ErrorKind::InvalidValue, format!("invalid chain '{raw}'")))
}

fn looks_like_address(raw: &str) -> bool {
    raw.len() == 42
        && (raw.starts_with("0x") || raw.starts_with("0X"))
        && raw[2..].chars().all(|c| c.is_ascii_hexdigit())
}

fn usage_error(kind: ErrorKind, message: String) -> clap::Error {
    Args::command().error(kind, message)
}
