//! Talking to the user's wallet
//!
//! The wallet is reached through an EIP-1193 style [WalletProvider], we only need its `request` method.
//!
//! Switching networks never fails from the caller's point of view, see [NetworkSwitcher]

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

pub mod http;
pub mod switcher;

pub use switcher::{add_network, handle_network_change, NetworkEvent, NetworkObserver, NetworkSwitcher};

/// Error code a wallet returns when asked to switch to a chain it doesn't know
pub const UNRECOGNIZED_CHAIN: i64 = 4902;

/// Error code a wallet returns when the user rejects a request
pub const USER_REJECTED: i64 = 4001;

pub const SWITCH_CHAIN_METHOD: &str = "wallet_switchEthereumChain";
pub const ADD_CHAIN_METHOD: &str = "wallet_addEthereumChain";


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The wallet answered with an error
    #[error("wallet error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// We could not reach the wallet or understand its answer
    #[error("wallet transport error: {0}")]
    Transport(String),
}

impl ProviderError {
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            Self::Transport(_) => None,
        }
    }

    /// Does this error mean the wallet doesn't know the chain?
    pub fn is_unrecognized_chain(&self) -> bool {
        self.code() == Some(UNRECOGNIZED_CHAIN)
    }
}

/// A wallet we can send requests to
#[async_trait]
pub trait WalletProvider: Send + Sync {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError>;
}

#[async_trait]
impl<P: WalletProvider + ?Sized> WalletProvider for Arc<P> {
    async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
        (**self).request(method, params).await
    }
}
