use thiserror::Error;

use crate::config::ConfigError;
use crate::keys::KeyError;
use crate::ledger_client::LedgerClientError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Metadata URL is missing. Pass it as the first argument.")]
    MissingArgument,
    #[error("Config Error: {0}")]
    Config(#[from] ConfigError),
    #[error("Credential Error: {0}")]
    Credential(#[from] KeyError),
    #[error("Network Error: {0}")]
    Network(#[from] LedgerClientError),
    #[error("Failed to extract object ID from transaction {digest}")]
    Extraction { digest: String },
}
