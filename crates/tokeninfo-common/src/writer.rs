use crate::types::{TokenInfoError, TokenRecord};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

pub const DEFAULT_OUTPUT_DIR: &str = "./chains/evm";
pub const INFO_FILE: &str = "info.json";
pub const LOGO_FILE: &str = "logo.png";

/// Files produced for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPaths {
    pub token_dir: PathBuf,
    pub info: PathBuf,
    pub logo: Option<PathBuf>,
}

/// Lays out `<root>/<chain id>/<address>/{info.json,logo.png}`.
#[derive(Debug, Clone)]
pub struct TokenWriter {
    root: PathBuf,
}

impl TokenWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn token_dir(&self, chain_id: u64, address: &str) -> PathBuf {
        self.root.join(chain_id.to_string()).join(address)
    }

    /// Writes `info.json` (and the logo, if any), replacing whatever was there.
    /// The logo is read before anything is created, so a failure leaves no output.
    pub fn write(
        &self,
        chain_id: u64,
        record: &TokenRecord,
        logo: Option<&Path>,
    ) -> Result<WrittenPaths, TokenInfoError> {
        let json = serde_json::to_string_pretty(record)?;
        let logo_bytes = match logo {
            Some(src) => Some(fs::read(src).map_err(|e| TokenInfoError::io("read logo", src, e))?),
            None => None,
        };

        let token_dir = self.token_dir(chain_id, &record.address);
        fs::create_dir_all(&token_dir)
            .map_err(|e| TokenInfoError::io("create directory", &token_dir, e))?;

        let info = token_dir.join(INFO_FILE);
        fs::write(&info, json).map_err(|e| TokenInfoError::io("write", &info, e))?;
        info!(path = %info.display(), "token info written");

        let logo = match logo_bytes {
            Some(bytes) => {
                let dest = token_dir.join(LOGO_FILE);
                if let Err(e) = fs::write(&dest, bytes) {
                    let _ = fs::remove_file(&info);
                    return Err(TokenInfoError::io("write logo", &dest, e));
                }
                info!(path = %dest.display(), "token logo copied");
                Some(dest)
            }
            None => None,
        };

        Ok(WrittenPaths {
            token_dir,
            info,
            logo,
        })
    }
}
