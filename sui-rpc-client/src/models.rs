use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const JSON_RPC_VERSION: &str = "2.0";

#[derive(Serialize, Debug)]
pub struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str, params: Value) -> Self {
        RpcRequest {
            jsonrpc: JSON_RPC_VERSION,
            id,
            method,
            params,
        }
    }

    pub fn method(&self) -> &str {
        self.method
    }
}

#[derive(Deserialize, Debug)]
pub struct RpcResponse {
    pub result: Option<Value>,
    pub error: Option<RpcError>,
}

#[derive(Deserialize, Debug)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// Arguments of a single `unsafe_moveCall`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCallRequest {
    pub signer: String,
    pub package_object_id: String,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<String>,
    pub arguments: Vec<Value>,
    /// Gas coin to pay with. `None` lets the node pick one owned by `signer`.
    pub gas: Option<String>,
    pub gas_budget: u64,
}

impl MoveCallRequest {
    pub(crate) fn to_params(&self) -> Value {
        serde_json::json!([
            self.signer,
            self.package_object_id,
            self.module,
            self.function,
            self.type_arguments,
            self.arguments,
            self.gas,
            self.gas_budget.to_string(),
        ])
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockBytes {
    tx_bytes: String,
    #[serde(default)]
    gas: Vec<ObjectRef>,
}

impl TransactionBlockBytes {
    /// Base64 encoded BCS `TransactionData`
    pub fn tx_bytes(&self) -> &str {
        &self.tx_bytes
    }

    pub fn gas(&self) -> &[ObjectRef] {
        &self.gas
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRef {
    object_id: String,
    #[serde(deserialize_with = "u64_from_number_or_string")]
    version: u64,
    digest: String,
}

impl ObjectRef {
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct OwnedObjectRef {
    #[serde(default)]
    owner: Value,
    reference: ObjectRef,
}

impl OwnedObjectRef {
    pub fn owner(&self) -> &Value {
        &self.owner
    }

    pub fn reference(&self) -> &ObjectRef {
        &self.reference
    }
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockResponseOptions {
    pub show_input: bool,
    pub show_raw_input: bool,
    pub show_effects: bool,
    pub show_events: bool,
    pub show_object_changes: bool,
    pub show_balance_changes: bool,
}

impl TransactionBlockResponseOptions {
    pub fn with_effects(mut self) -> Self {
        self.show_effects = true;
        self
    }

    pub fn with_events(mut self) -> Self {
        self.show_events = true;
        self
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteTransactionRequestType {
    WaitForEffectsCert,
    WaitForLocalExecution,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockResponse {
    digest: String,
    effects: Option<TransactionBlockEffects>,
    events: Option<Vec<Value>>,
    #[serde(default)]
    errors: Vec<String>,
}

impl TransactionBlockResponse {
    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn effects(&self) -> Option<&TransactionBlockEffects> {
        self.effects.as_ref()
    }

    pub fn events(&self) -> Option<&[Value]> {
        self.events.as_deref()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct TransactionBlockEffects {
    status: ExecutionStatus,
    #[serde(default)]
    created: Vec<OwnedObjectRef>,
}

impl TransactionBlockEffects {
    pub fn status(&self) -> &ExecutionStatus {
        &self.status
    }

    pub fn created(&self) -> &[OwnedObjectRef] {
        &self.created
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExecutionStatus {
    status: String,
    error: Option<String>,
}

impl ExecutionStatus {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

// Full nodes have rendered sequence numbers both ways across releases.
fn u64_from_number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.parse().map_err(serde::de::Error::custom),
    }
}
