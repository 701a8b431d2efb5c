use thiserror::Error;

/// JSON-RPC backed client for a real full node
pub mod rpc_ledger_client;
/// Test ledger client module
pub mod test_ledger_client;

use async_trait::async_trait;

use crate::{execution::ExecutionResult, keys::SuiKeypair, transaction::Transaction};
use std::error;
use url::Url;

/// Interface defining interactions with the Sui network. The abstraction allows fake and mock
/// ledgers to stand in for a full node in tests.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Sign `tx` with `signer` and execute it as one remote call
    async fn sign_and_execute(
        &self,
        signer: &SuiKeypair,
        tx: &Transaction,
        options: ResponseOptions,
    ) -> LedgerClientResult<ExecutionResult>;
}

/// Opens a [`LedgerClient`] for an endpoint. Connecting is kept separate from construction of
/// whatever owns the connector so nothing touches the network before it is needed.
pub trait Connect {
    /// Client produced by this connector
    type Client: LedgerClient;

    /// Open a client for `rpc_url`
    fn connect(&self, rpc_url: &Url) -> LedgerClientResult<Self::Client>;
}

/// Which details the node should include in its execution response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseOptions {
    /// Include effects (status, created objects)
    pub show_effects: bool,
    /// Include emitted events
    pub show_events: bool,
}

impl ResponseOptions {
    /// Effects and events
    pub fn effects_and_events() -> Self {
        ResponseOptions {
            show_effects: true,
            show_events: true,
        }
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum LedgerClientError {
    #[error("Couldn't connect to {0}: {1:?}")]
    Connect(Url, Box<dyn error::Error + Send + Sync>),
    #[error("Failed to build transaction: {0:?}")]
    FailedToBuildTx(Box<dyn error::Error + Send + Sync>),
    #[error("Failed to issue transaction: {0:?}")]
    FailedToIssueTx(Box<dyn error::Error + Send + Sync>),
    #[error("Unsupported transaction: {0}")]
    UnsupportedTransaction(String),
    #[error("Malformed response: {0:?}")]
    BadResponse(Box<dyn error::Error + Send + Sync>),
}

/// Result of a [`LedgerClient`] call
pub type LedgerClientResult<T> = Result<T, LedgerClientError>;
