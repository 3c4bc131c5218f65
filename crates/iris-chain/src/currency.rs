use alloy::primitives::Address;
use serde::{Deserialize, Serialize};


/// A token from the token list
///
/// Native currencies use the `0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE` placeholder address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub chain_id: u64,
    pub address: Address,
    pub symbol: String,
    pub name: String,

    /// Decimal precision of the token, the `units` used by the amount formatter
    pub decimals: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Currency {
    pub fn new(chain_id: u64, address: Address, symbol: impl Into<String>, name: impl Into<String>, decimals: u8) -> Self {
        Self {
            chain_id,
            address,
            symbol: symbol.into(),
            name: name.into(),
            decimals,
            icon: None,
        }
    }

    /// Is this the native currency placeholder?
    pub fn is_native(&self) -> bool {
        self.address == NATIVE_ADDRESS
    }
}

/// Placeholder address the route API uses for native currencies
pub const NATIVE_ADDRESS: Address = Address::new([0xee; 20]);

/// Filters the tokens of a particular chain from the token list
pub fn filter_tokens_by_chain(tokens: &[Currency], chain_id: u64) -> Vec<Currency> {
    tokens
        .iter()
        .filter(|token| token.chain_id == chain_id)
        .cloned()
        .collect()
}
