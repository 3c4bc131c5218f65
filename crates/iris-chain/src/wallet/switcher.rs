use serde::Serialize;
use serde_json::json;
use tracing::{error, info, warn};

use super::{ProviderError, WalletProvider, ADD_CHAIN_METHOD, SWITCH_CHAIN_METHOD};
use crate::chain::{Chain, NativeCurrency};


/// Terminal state of a network switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkEvent {
    /// The wallet is now on the chain
    Switched { chain_id: u64 },

    /// The wallet didn't know the chain and accepted to add it
    Added { chain_id: u64 },

    /// Adding the chain failed
    AddFailed { chain_id: u64, error: ProviderError },

    /// The switch failed for a reason other than an unknown chain
    SwitchFailed { chain_id: u64, error: ProviderError },
}

/// Gets notified about every terminal [NetworkEvent]
pub type NetworkObserver = Box<dyn Fn(&NetworkEvent) + Send + Sync>;

/// `wallet_addEthereumChain` parameter (EIP-3085)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddChainParameter<'a> {
    chain_id: String,
    chain_name: &'a str,
    rpc_urls: &'a [String],
    native_currency: &'a NativeCurrency,
    block_explorer_urls: &'a [String],
}

impl<'a> From<&'a Chain> for AddChainParameter<'a> {
    fn from(chain: &'a Chain) -> Self {
        Self {
            chain_id: chain.hex_id(),
            chain_name: &chain.name,
            rpc_urls: &chain.rpcs,
            native_currency: &chain.currency,
            block_explorer_urls: &chain.explorers,
        }
    }
}

/// Moves a wallet to another chain
///
/// 1. `wallet_switchEthereumChain` to the chain
/// 2. if the wallet doesn't know the chain (`4902`) `wallet_addEthereumChain` with the full chain descriptor,
///    the switch is not retried after the chain is added
///
/// Failures are logged and reported to the observer, they are never returned
pub struct NetworkSwitcher<P> {
    provider: P,
    observer: Option<NetworkObserver>,
}

impl<P: WalletProvider> NetworkSwitcher<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            observer: None,
        }
    }

    pub fn with_observer(mut self, observer: NetworkObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Ask the wallet to switch to `chain`
    pub async fn switch(&self, chain: &Chain) {
        let params = json!([{ "chainId": chain.hex_id() }]);

        match self.provider.request(SWITCH_CHAIN_METHOD, params).await {
            Ok(_) => {
                info!("Switched wallet to chain {}", chain.chain_id);
                self.notify(NetworkEvent::Switched { chain_id: chain.chain_id });
            }
            Err(e) if e.is_unrecognized_chain() => {
                info!("Chain {} unknown to the wallet, adding it", chain.chain_id);
                self.add(chain).await;
            }
            Err(e) => {
                warn!("Error switching to chain {}: {}", chain.chain_id, e);
                self.notify(NetworkEvent::SwitchFailed {
                    chain_id: chain.chain_id,
                    error: e,
                });
            }
        }
    }

    /// Ask the wallet to add `chain`
    pub async fn add(&self, chain: &Chain) {
        let params = json!([AddChainParameter::from(chain)]);

        match self.provider.request(ADD_CHAIN_METHOD, params).await {
            Ok(_) => {
                info!("Added chain {} to the wallet", chain.chain_id);
                self.notify(NetworkEvent::Added { chain_id: chain.chain_id });
            }
            Err(e) => {
                error!("Error adding eth network {} ({}): {}", chain.chain_id, chain.name, e);
                self.notify(NetworkEvent::AddFailed {
                    chain_id: chain.chain_id,
                    error: e,
                });
            }
        }
    }

    fn notify(&self, event: NetworkEvent) {
        if let Some(observer) = &self.observer {
            observer(&event);
        }
    }
}

/// Switch the wallet to `chain`, adding the chain if the wallet doesn't know it
pub async fn handle_network_change<P: WalletProvider>(provider: P, chain: &Chain) {
    NetworkSwitcher::new(provider).switch(chain).await
}

/// Add `chain` to the wallet
pub async fn add_network<P: WalletProvider>(provider: P, chain: &Chain) {
    NetworkSwitcher::new(provider).add(chain).await
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::{UNRECOGNIZED_CHAIN, USER_REJECTED};
    use async_trait::async_trait;
    use serde_json::Value;
    use std::{
        collections::VecDeque,
        sync::{Arc, Mutex},
    };

    /// Answers requests from a queue and records them
    #[derive(Default)]
    struct MockProvider {
        answers: Mutex<VecDeque<Result<Value, ProviderError>>>,
        requests: Mutex<Vec<(String, Value)>>,
    }

    impl MockProvider {
        fn answering(answers: Vec<Result<Value, ProviderError>>) -> Arc<Self> {
            Arc::new(Self {
                answers: Mutex::new(answers.into()),
                requests: Mutex::default(),
            })
        }

        fn requests(&self) -> Vec<(String, Value)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WalletProvider for MockProvider {
        async fn request(&self, method: &str, params: Value) -> Result<Value, ProviderError> {
            self.requests.lock().unwrap().push((method.to_string(), params));
            self.answers.lock().unwrap().pop_front().unwrap_or(Ok(Value::Null))
        }
    }

    fn polygon() -> Chain {
        Chain::new(137, "Polygon", NativeCurrency::new("MATIC", "MATIC", 18))
            .with_rpcs(vec!["https://polygon-rpc.com".to_string()])
            .with_explorers(vec!["https://polygonscan.com".to_string()])
    }

    fn recorder() -> (Arc<Mutex<Vec<NetworkEvent>>>, NetworkObserver) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let observer: NetworkObserver = Box::new(move |event: &NetworkEvent| sink.lock().unwrap().push(event.clone()));
        (events, observer)
    }

    #[tokio::test]
    async fn switch_success_sends_hex_chain_id() {
        let provider = MockProvider::answering(vec![Ok(Value::Null)]);
        let (events, observer) = recorder();

        NetworkSwitcher::new(provider.clone()).with_observer(observer).switch(&polygon()).await;

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, SWITCH_CHAIN_METHOD);
        assert_eq!(requests[0].1, json!([{ "chainId": "0x89" }]));
        assert_eq!(*events.lock().unwrap(), vec![NetworkEvent::Switched { chain_id: 137 }]);
    }

    #[tokio::test]
    async fn unknown_chain_falls_back_to_add_chain() {
        let provider = MockProvider::answering(vec![
            Err(ProviderError::rpc(UNRECOGNIZED_CHAIN, "Unrecognized chain ID")),
            Ok(Value::Null),
        ]);
        let (events, observer) = recorder();

        NetworkSwitcher::new(provider.clone()).with_observer(observer).switch(&polygon()).await;

        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].0, ADD_CHAIN_METHOD);
        assert_eq!(
            requests[1].1,
            json!([{
                "chainId": "0x89",
                "chainName": "Polygon",
                "rpcUrls": ["https://polygon-rpc.com"],
                "nativeCurrency": { "name": "MATIC", "symbol": "MATIC", "decimals": 18 },
                "blockExplorerUrls": ["https://polygonscan.com"]
            }])
        );
        // the switch is not retried
        assert_eq!(*events.lock().unwrap(), vec![NetworkEvent::Added { chain_id: 137 }]);
    }

    #[tokio::test]
    async fn other_errors_are_swallowed_without_adding() {
        let rejected = ProviderError::rpc(USER_REJECTED, "User rejected the request");
        let provider = MockProvider::answering(vec![Err(rejected.clone())]);
        let (events, observer) = recorder();

        NetworkSwitcher::new(provider.clone()).with_observer(observer).switch(&polygon()).await;

        assert_eq!(provider.requests().len(), 1);
        assert_eq!(
            *events.lock().unwrap(),
            vec![NetworkEvent::SwitchFailed { chain_id: 137, error: rejected }]
        );
    }

    #[tokio::test]
    async fn failed_add_is_reported_not_returned() {
        let provider = MockProvider::answering(vec![
            Err(ProviderError::rpc(UNRECOGNIZED_CHAIN, "Unrecognized chain ID")),
            Err(ProviderError::Transport("connection reset".to_string())),
        ]);
        let (events, observer) = recorder();

        NetworkSwitcher::new(provider.clone()).with_observer(observer).switch(&polygon()).await;

        assert_eq!(provider.requests().len(), 2);
        assert_eq!(
            *events.lock().unwrap(),
            vec![NetworkEvent::AddFailed {
                chain_id: 137,
                error: ProviderError::Transport("connection reset".to_string()),
            }]
        );
    }

    #[tokio::test]
    async fn free_functions_work_without_observer() {
        let provider = MockProvider::answering(vec![Err(ProviderError::rpc(UNRECOGNIZED_CHAIN, "unknown"))]);
        handle_network_change(provider.clone(), &polygon()).await;
        assert_eq!(provider.requests().len(), 2);

        let provider = MockProvider::answering(vec![]);
        add_network(provider.clone(), &polygon()).await;
        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, ADD_CHAIN_METHOD);
    }
}
