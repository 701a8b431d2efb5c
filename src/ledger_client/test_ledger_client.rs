use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use crate::{
    address::{ObjectId, SuiAddress},
    execution::{CreatedObject, Effects, ExecutionResult, ExecutionStatus},
    keys::SuiKeypair,
    ledger_client::{Connect, LedgerClient, LedgerClientError, LedgerClientResult, ResponseOptions},
    transaction::Transaction,
};
use async_trait::async_trait;
use thiserror::Error;
use url::Url;

#[cfg(test)]
mod tests;

/// A transaction as the [`TestLedgerClient`] received it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedTx {
    /// Address of the keypair that signed
    pub signer: SuiAddress,
    /// The transaction as built, before signing
    pub transaction: Transaction,
    /// What the caller asked to see in the response
    pub options: ResponseOptions,
}

#[derive(Debug, Clone)]
enum Outcome {
    Execute {
        status: ExecutionStatus,
        created: Vec<ObjectId>,
        with_effects: bool,
    },
    Reject(String),
}

/// Scripted failure of a [`TestLedgerClient`]
#[derive(Debug, Error)]
pub enum TestLedgerClientError {
    /// Submission refused with this reason
    #[error("Rejected by test ledger: {0}")]
    Rejected(String),
}

/// In-memory [`LedgerClient`] that records what it is asked to execute and answers with a
/// scripted outcome. Clones share the same record.
#[derive(Debug, Clone)]
pub struct TestLedgerClient {
    outcome: Outcome,
    submitted: Arc<Mutex<Vec<SubmittedTx>>>,
}

impl TestLedgerClient {
    fn new(outcome: Outcome) -> Self {
        TestLedgerClient {
            outcome,
            submitted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Succeeds and reports `created` as the created objects, in order
    pub fn creating(created: Vec<ObjectId>) -> Self {
        Self::new(Outcome::Execute {
            status: ExecutionStatus::Success,
            created,
            with_effects: true,
        })
    }

    /// Succeeds without creating anything
    pub fn creating_nothing() -> Self {
        Self::creating(Vec::new())
    }

    /// Executes but the transaction aborts
    pub fn failing_execution(error: &str) -> Self {
        Self::new(Outcome::Execute {
            status: ExecutionStatus::Failure(error.to_string()),
            created: Vec::new(),
            with_effects: true,
        })
    }

    /// Succeeds but leaves effects out of the response
    pub fn without_effects() -> Self {
        Self::new(Outcome::Execute {
            status: ExecutionStatus::Success,
            created: Vec::new(),
            with_effects: false,
        })
    }

    /// Every submission fails with `reason`
    pub fn rejecting(reason: &str) -> Self {
        Self::new(Outcome::Reject(reason.to_string()))
    }

    /// Everything submitted so far
    pub fn submitted(&self) -> Vec<SubmittedTx> {
        self.submitted
            .lock()
            .map(|submitted| submitted.clone())
            .unwrap_or_default()
    }

    fn record(&self, tx: SubmittedTx) -> usize {
        match self.submitted.lock() {
            Ok(mut submitted) => {
                submitted.push(tx);
                submitted.len()
            }
            Err(_) => 0,
        }
    }
}

#[async_trait]
impl LedgerClient for TestLedgerClient {
    async fn sign_and_execute(
        &self,
        signer: &SuiKeypair,
        tx: &Transaction,
        options: ResponseOptions,
    ) -> LedgerClientResult<ExecutionResult> {
        let count = self.record(SubmittedTx {
            signer: signer.address(),
            transaction: tx.clone(),
            options,
        });
        match &self.outcome {
            Outcome::Reject(reason) => Err(LedgerClientError::FailedToIssueTx(Box::new(
                TestLedgerClientError::Rejected(reason.clone()),
            ))),
            Outcome::Execute {
                status,
                created,
                with_effects,
            } => {
                let digest = format!("test-digest-{}", count);
                let effects = (*with_effects && options.show_effects).then(|| {
                    let created = created
                        .iter()
                        .map(|id| CreatedObject::new(*id))
                        .collect();
                    Effects::new(status.clone(), created)
                });
                Ok(ExecutionResult::new(&digest, effects))
            }
        }
    }
}

/// [`Connect`] that hands out clones of one [`TestLedgerClient`] and counts connections
#[derive(Debug, Clone)]
pub struct TestConnector {
    client: TestLedgerClient,
    connections: Arc<AtomicUsize>,
}

impl TestConnector {
    /// Hands out clones of `client`, so every connection shares its record
    pub fn new(client: TestLedgerClient) -> Self {
        TestConnector {
            client,
            connections: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The shared client, for inspecting submissions
    pub fn client(&self) -> &TestLedgerClient {
        &self.client
    }

    /// How many times [`Connect::connect`] was called
    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

impl Connect for TestConnector {
    type Client = TestLedgerClient;

    fn connect(&self, _rpc_url: &Url) -> LedgerClientResult<Self::Client> {
        self.connections.fetch_add(1, Ordering::SeqCst);
        Ok(self.client.clone())
    }
}
