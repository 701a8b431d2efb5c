use crate::{
    address::{ObjectId, SuiAddress},
    execution::{CreatedObject, Effects, ExecutionResult, ExecutionStatus},
    keys::SuiKeypair,
    ledger_client::{Connect, LedgerClient, LedgerClientError, LedgerClientResult, ResponseOptions},
    transaction::{MoveCall, Transaction},
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sui_rpc_client::{
    models::{
        ExecuteTransactionRequestType, MoveCallRequest, TransactionBlockResponse,
        TransactionBlockResponseOptions,
    },
    SuiHttp, SuiHttpTrait,
};
use tracing::{debug, info};
use url::Url;

/// Budget used when a transaction doesn't carry one. 0.01 SUI.
pub const DEFAULT_GAS_BUDGET: u64 = 10_000_000;

/// Connects [`RpcLedgerClient`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct RpcConnector;

impl Connect for RpcConnector {
    type Client = RpcLedgerClient<SuiHttp>;

    fn connect(&self, rpc_url: &Url) -> LedgerClientResult<Self::Client> {
        let http = SuiHttp::new(rpc_url.as_str())
            .map_err(|e| LedgerClientError::Connect(rpc_url.clone(), Box::new(e)))?;
        Ok(RpcLedgerClient::new(http))
    }
}

/// [`LedgerClient`] that lets the full node build the transaction bytes (`unsafe_moveCall`),
/// signs them locally, and submits them with `sui_executeTransactionBlock`.
pub struct RpcLedgerClient<Http: SuiHttpTrait> {
    http: Http,
}

impl<Http: SuiHttpTrait> RpcLedgerClient<Http> {
    /// Wrap an HTTP client already pointed at a node
    pub fn new(http: Http) -> Self {
        RpcLedgerClient { http }
    }
}

#[async_trait]
impl<Http: SuiHttpTrait + Send + Sync> LedgerClient for RpcLedgerClient<Http> {
    async fn sign_and_execute(
        &self,
        signer: &SuiKeypair,
        tx: &Transaction,
        options: ResponseOptions,
    ) -> LedgerClientResult<ExecutionResult> {
        let call = tx.single_move_call().ok_or_else(|| {
            LedgerClientError::UnsupportedTransaction(format!(
                "expected exactly one Move call, got {} commands",
                tx.commands().len()
            ))
        })?;
        let gas_budget = tx.gas_budget().unwrap_or(DEFAULT_GAS_BUDGET);
        let request = move_call_request(&signer.address(), call, gas_budget);

        debug!(function = %call.target(), gas_budget, "building transaction");
        let unsigned = self
            .http
            .unsafe_move_call(&request)
            .await
            .map_err(|e| LedgerClientError::FailedToBuildTx(Box::new(e)))?;
        let tx_bytes = STANDARD
            .decode(unsigned.tx_bytes())
            .map_err(|e| LedgerClientError::FailedToBuildTx(Box::new(e)))?;
        let signature = signer.sign_transaction(&tx_bytes);

        info!(sender = %signer.address(), "submitting transaction");
        let res = self
            .http
            .execute_transaction_block(
                unsigned.tx_bytes(),
                &[signature.to_base64()],
                &response_options(options),
                ExecuteTransactionRequestType::WaitForLocalExecution,
            )
            .await
            .map_err(|e| LedgerClientError::FailedToIssueTx(Box::new(e)))?;
        execution_result_from_response(&res)
    }
}

fn move_call_request(signer: &SuiAddress, call: &MoveCall, gas_budget: u64) -> MoveCallRequest {
    let target = call.target();
    MoveCallRequest {
        signer: signer.to_string(),
        package_object_id: target.package().to_string(),
        module: target.module().to_string(),
        function: target.function().to_string(),
        type_arguments: Vec::new(),
        arguments: call.arguments().iter().map(|arg| arg.to_json()).collect(),
        gas: None,
        gas_budget,
    }
}

fn response_options(options: ResponseOptions) -> TransactionBlockResponseOptions {
    let mut inner = TransactionBlockResponseOptions::default();
    if options.show_effects {
        inner = inner.with_effects();
    }
    if options.show_events {
        inner = inner.with_events();
    }
    inner
}

fn execution_result_from_response(
    res: &TransactionBlockResponse,
) -> LedgerClientResult<ExecutionResult> {
    let effects = match res.effects() {
        Some(effects) => {
            let status = if effects.status().is_success() {
                ExecutionStatus::Success
            } else {
                let error = effects.status().error().unwrap_or("unknown error");
                ExecutionStatus::Failure(error.to_string())
            };
            let created = effects
                .created()
                .iter()
                .map(|owned| {
                    let reference = owned.reference();
                    let object_id: ObjectId = reference
                        .object_id()
                        .parse()
                        .map_err(|e| LedgerClientError::BadResponse(Box::new(e)))?;
                    Ok(CreatedObject::new(object_id))
                })
                .collect::<LedgerClientResult<Vec<_>>>()?;
            Some(Effects::new(status, created))
        }
        None => None,
    };
    Ok(ExecutionResult::new(res.digest(), effects))
}
