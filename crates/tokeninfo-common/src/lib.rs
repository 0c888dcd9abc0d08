pub mod chains;
pub mod generator;
pub mod reader;
pub mod types;
pub mod writer;

pub use chains::{ChainDescriptor, ChainRegistry, ChainSelector};
pub use generator::{
    create_token_info, parse_token_address, GenerateOptions, GeneratedToken, PreparedJob,
    TokenInfoGenerator, TokenInfoInput,
};
pub use reader::{RpcEndpoint, RpcTokenReader, TokenReader, DEFAULT_RPC_BASE};
pub use types::*;
pub use writer::{TokenWriter, WrittenPaths, DEFAULT_OUTPUT_DIR, INFO_FILE, LOGO_FILE};
