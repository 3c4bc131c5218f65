use alloy::primitives::U256;
use serde::{Deserialize, Serialize};



/// A network the widget can bridge from or to
///
/// Mirrors the chain objects of the route API (`rpcs`, `explorers`, `currency`)
/// so a chain list can be loaded straight from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub chain_id: u64,

    pub name: String,

    /// RPC endpoints, passed to the wallet when the chain has to be added
    #[serde(default)]
    pub rpcs: Vec<String>,

    /// Native currency of the chain
    pub currency: NativeCurrency,

    /// Block explorer base urls, the first one is used for links
    #[serde(default)]
    pub explorers: Vec<String>,
}

impl Chain {
    pub fn new(chain_id: u64, name: impl Into<String>, currency: NativeCurrency) -> Self {
        Self {
            chain_id,
            name: name.into(),
            rpcs: Vec::new(),
            currency,
            explorers: Vec::new(),
        }
    }

    pub fn with_rpcs(mut self, rpcs: Vec<String>) -> Self {
        self.rpcs = rpcs;
        self
    }

    pub fn with_explorers(mut self, explorers: Vec<String>) -> Self {
        self.explorers = explorers;
        self
    }

    /// The chain id as a `0x` prefixed hex string without leading zeros
    ///
    /// This is the format wallets expect, eg. `1 -> 0x1`, `137 -> 0x89`
    pub fn hex_id(&self) -> String {
        format!("0x{:x}", U256::from(self.chain_id))
    }

    /// The main block explorer of the chain (if any)
    pub fn explorer(&self) -> Option<&str> {
        self.explorers.first().map(String::as_str)
    }
}


/// Native currency descriptor of a [Chain]
///
/// Serialized as-is into the `nativeCurrency` field of `wallet_addEthereumChain`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl NativeCurrency {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }
}

impl Default for NativeCurrency {
    fn default() -> Self {
        Self::new("Ether", "ETH", 18)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_id_has_no_leading_zeros() {
        let eth = Chain::new(1, "Ethereum", NativeCurrency::default());
        let polygon = Chain::new(137, "Polygon", NativeCurrency::new("Matic", "MATIC", 18));
        let arbitrum = Chain::new(42161, "Arbitrum", NativeCurrency::default());

        assert_eq!(eth.hex_id(), "0x1");
        assert_eq!(polygon.hex_id(), "0x89");
        assert_eq!(arbitrum.hex_id(), "0xa4b1");
    }

    #[test]
    fn deserialize_chain_from_api_json() {
        let json = r#"{
            "chainId": 10,
            "name": "Optimism",
            "icon": "https://example.com/op.svg",
            "rpcs": ["https://mainnet.optimism.io"],
            "explorers": ["https://optimistic.etherscan.io"],
            "currency": { "name": "Ether", "symbol": "ETH", "decimals": 18, "address": "0xeeee" }
        }"#;

        let chain: Chain = serde_json::from_str(json).unwrap();
        assert_eq!(chain.chain_id, 10);
        assert_eq!(chain.rpcs, vec!["https://mainnet.optimism.io".to_string()]);
        assert_eq!(chain.explorer(), Some("https://optimistic.etherscan.io"));
        assert_eq!(chain.currency, NativeCurrency::default());
    }
}
