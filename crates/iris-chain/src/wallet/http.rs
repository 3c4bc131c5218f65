use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

use super::{ProviderError, WalletProvider};


#[derive(Debug, Deserialize)]
struct RpcErrorPayload {
    code: i64,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcErrorPayload>,
}

/// A wallet exposing its EIP-1193 provider over JSON-RPC/HTTP
///
/// Desktop wallets (eg. Frame on `http://127.0.0.1:1248`) accept the same `wallet_*` methods as
/// the browser injected providers
pub struct HttpWalletProvider {
    client: Client,
    url: String,
    next_id: AtomicU64,
}

impl HttpWalletProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WalletProvider for HttpWalletProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        trace!("Wallet request {} {}", id, method);

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let response: RpcResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        match response.error {
            Some(error) => Err(ProviderError::rpc(error.code, error.message)),
            None => Ok(response.result.unwrap_or(Value::Null)),
        }
    }
}
