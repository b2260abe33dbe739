//! Chain JSON-RPC provider with timeout and error handling.
//!
//! # Responsibilities
//! - Submit contract calls and return the resulting certificate
//! - Query the events a finalized transaction emitted
//! - Classify transport, decode, and node-reported failures

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::time::timeout;

use crate::chain::types::{
    ChainConfig, ChainError, ChainResult, ContractCall, TransactionCertificate, TransactionEvent,
};

/// RPC method submitting a contract call.
pub const RPC_EXECUTE_MOVE_CALL: &str = "sui_executeMoveCall";

/// RPC method listing the events a transaction emitted.
pub const RPC_GET_EVENTS: &str = "sui_getEvents";

/// Consumed chain interface: submit a call, query emitted events.
///
/// Signing is the node's concern behind this boundary; callers hand over a
/// fully described call and receive a certificate.
pub trait ChainProvider {
    /// Submit a contract call and wait for its certificate.
    fn execute_call(
        &self,
        call: &ContractCall,
    ) -> impl std::future::Future<Output = ChainResult<TransactionCertificate>> + Send;

    /// Events emitted by the transaction with `digest`, in emission order.
    fn events_for(
        &self,
        digest: &str,
    ) -> impl std::future::Future<Output = ChainResult<Vec<TransactionEvent>>> + Send;
}

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct EventPage {
    #[serde(default)]
    data: Vec<TransactionEvent>,
}

/// `ChainProvider` over HTTP JSON-RPC 2.0.
#[derive(Clone)]
pub struct JsonRpcProvider {
    http: reqwest::Client,
    config: ChainConfig,
}

impl JsonRpcProvider {
    /// Create a provider for the configured node.
    pub fn new(config: ChainConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    async fn request(&self, method: &str, params: Value) -> ChainResult<Value> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let send = self.http.post(&self.config.rpc_url).json(&request).send();
        let response = timeout(self.request_timeout(), send)
            .await
            .map_err(|_| ChainError::Timeout(self.config.request_timeout_secs))?
            .map_err(|e| ChainError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChainError::Network(format!(
                "chain node returned status {}",
                status
            )));
        }

        let body = timeout(self.request_timeout(), response.text())
            .await
            .map_err(|_| ChainError::Timeout(self.config.request_timeout_secs))?
            .map_err(|e| ChainError::Network(e.to_string()))?;

        let decoded: RpcResponse =
            serde_json::from_str(&body).map_err(|e| ChainError::Decode(e.to_string()))?;

        if let Some(err) = decoded.error {
            return Err(ChainError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        decoded
            .result
            .ok_or_else(|| ChainError::Decode("response carried neither result nor error".into()))
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.config.request_timeout_secs)
    }
}

impl ChainProvider for JsonRpcProvider {
    async fn execute_call(&self, call: &ContractCall) -> ChainResult<TransactionCertificate> {
        tracing::debug!(
            package = %call.package,
            module = %call.module,
            function = %call.function,
            gas_budget = call.gas_budget,
            "Submitting contract call"
        );

        let params = json!([
            call.package,
            call.module,
            call.function,
            call.type_args,
            call.args,
            call.gas_budget,
        ]);
        let result = self.request(RPC_EXECUTE_MOVE_CALL, params).await?;
        serde_json::from_value(result).map_err(|e| ChainError::Decode(e.to_string()))
    }

    async fn events_for(&self, digest: &str) -> ChainResult<Vec<TransactionEvent>> {
        let result = self.request(RPC_GET_EVENTS, json!([digest])).await?;
        let page: EventPage =
            serde_json::from_value(result).map_err(|e| ChainError::Decode(e.to_string()))?;
        Ok(page.data)
    }
}

impl std::fmt::Debug for JsonRpcProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRpcProvider")
            .field("rpc_url", &self.config.rpc_url)
            .field("timeout_secs", &self.config.request_timeout_secs)
            .finish()
    }
}
