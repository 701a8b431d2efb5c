use crate::models::{
    ExecuteTransactionRequestType, MoveCallRequest, RpcRequest, RpcResponse,
    TransactionBlockBytes, TransactionBlockResponse, TransactionBlockResponseOptions,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

pub mod error;
pub mod models;

pub const DEVNET_URL: &str = "https://fullnode.devnet.sui.io:443";
// Used by the ignored live tests. Override with `SUI_RPC_URL`.
const TEST_URL_VAR: &str = "SUI_RPC_URL";

pub fn get_test_sui_http_client() -> Result<SuiHttp> {
    let url = std::env::var(TEST_URL_VAR).unwrap_or_else(|_| DEVNET_URL.to_string());
    SuiHttp::new(&url)
}

#[derive(Debug, Clone)]
pub struct SuiHttp {
    url: Url,
    client: reqwest::Client,
}

#[async_trait]
pub trait SuiHttpTrait {
    /// Build unsigned transaction bytes for one Move call.
    async fn unsafe_move_call(&self, call: &MoveCallRequest) -> Result<TransactionBlockBytes>;

    async fn execute_transaction_block(
        &self,
        tx_bytes: &str,
        signatures: &[String],
        options: &TransactionBlockResponseOptions,
        request_type: ExecuteTransactionRequestType,
    ) -> Result<TransactionBlockResponse>;
}

#[async_trait]
impl SuiHttpTrait for SuiHttp {
    async fn unsafe_move_call(&self, call: &MoveCallRequest) -> Result<TransactionBlockBytes> {
        self.call("unsafe_moveCall", call.to_params()).await
    }

    async fn execute_transaction_block(
        &self,
        tx_bytes: &str,
        signatures: &[String],
        options: &TransactionBlockResponseOptions,
        request_type: ExecuteTransactionRequestType,
    ) -> Result<TransactionBlockResponse> {
        let params = serde_json::json!([tx_bytes, signatures, options, request_type]);
        self.call("sui_executeTransactionBlock", params).await
    }
}

impl SuiHttp {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)?;
        let client = reqwest::Client::new();
        Ok(SuiHttp { url, client })
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let request = RpcRequest::new(1, method, params);
        debug!(method = request.method(), url = %self.url, "sending JSON-RPC request");
        let res = self
            .client
            .post(self.url.clone())
            .json(&request)
            .send()
            .await?;
        let res: RpcResponse = res.json().await?;
        decode_response(method, res)
    }
}

pub(crate) fn decode_response<T: DeserializeOwned>(method: &str, res: RpcResponse) -> Result<T> {
    match (res.result, res.error) {
        (_, Some(err)) => Err(Error::Rpc {
            code: err.code,
            message: err.message,
        }),
        (Some(result), None) => serde_json::from_value(result).map_err(Error::Decode),
        (None, None) => Err(Error::EmptyResponse(method.to_string())),
    }
}
