use serde::{Deserialize, Serialize};



/// Kind of a user transaction inside a [Route]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserTxType {
    /// Moves funds across chains, made of one or more [Step]s
    #[serde(rename = "fund-movr")]
    FundMovr,

    /// A swap on a decentralized exchange
    DexSwap,

    Claim,

    Sign,

    #[serde(other)]
    Unknown,
}

/// Protocol (bridge or dex) used by a step or a swap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Protocol {
    pub name: String,

    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub chain_id: u64,
    pub address: String,
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    pub decimals: u8,
}

/// A step of a `fund-movr` transaction, eg. a `middleware` swap before bridging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(rename = "type")]
    pub step_type: String,

    #[serde(default)]
    pub chain_id: Option<u64>,

    #[serde(default)]
    pub protocol: Option<Protocol>,

    #[serde(default)]
    pub from_asset: Option<Asset>,

    #[serde(default)]
    pub from_amount: Option<String>,

    #[serde(default)]
    pub to_asset: Option<Asset>,

    #[serde(default)]
    pub to_amount: Option<String>,
}

impl Step {
    pub fn is_middleware(&self) -> bool {
        self.step_type == "middleware"
    }
}

/// A transaction the user has to sign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTx {
    pub user_tx_type: UserTxType,

    /// Position of this transaction in the whole flow, unique per route
    pub user_tx_index: u32,

    #[serde(default)]
    pub chain_id: Option<u64>,

    #[serde(default)]
    pub protocol: Option<Protocol>,

    #[serde(default)]
    pub from_asset: Option<Asset>,

    #[serde(default)]
    pub from_amount: Option<String>,

    #[serde(default)]
    pub to_asset: Option<Asset>,

    #[serde(default)]
    pub to_amount: Option<String>,

    /// Only `fund-movr` transactions have steps
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// A bridge/swap plan returned by the route API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default)]
    pub route_id: String,

    #[serde(default)]
    pub from_amount: String,

    #[serde(default)]
    pub to_amount: String,

    #[serde(default)]
    pub used_bridge_names: Vec<String>,

    /// Estimated time in seconds
    #[serde(default)]
    pub service_time: u64,

    pub user_txs: Vec<UserTx>,
}

impl Route {
    /// First user transaction of the given type
    pub fn user_tx(&self, kind: UserTxType) -> Option<&UserTx> {
        self.user_txs.iter().find(|tx| tx.user_tx_type == kind)
    }
}

/// The swap part of a route at a given transaction index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapTx<'a> {
    /// The middleware step of the `fund-movr` transaction
    Middleware(&'a Step),

    /// The `dex-swap` transaction itself
    Dex(&'a UserTx),
}

/// Get the swap step of a route for the transaction at `current_tx`
///
/// - `fund-movr` at that index: its first `middleware` step, if it has one
/// - `dex-swap` at that index: the transaction itself
///
/// A missing index never matches.
///
/// `None` covers both "no transaction at that index" and "the `fund-movr` transaction has no
/// `middleware` step"
pub fn get_swap_tx(route: &Route, current_tx: Option<u32>) -> Option<SwapTx<'_>> {
    let current_tx = current_tx?;

    let fund_movr = route.user_tx(UserTxType::FundMovr);
    let dex = route.user_tx(UserTxType::DexSwap);

    if let Some(fund_movr) = fund_movr.filter(|tx| tx.user_tx_index == current_tx) {
        return fund_movr
            .steps
            .iter()
            .find(|step| step.is_middleware())
            .map(SwapTx::Middleware);
    }

    dex.filter(|tx| tx.user_tx_index == current_tx).map(SwapTx::Dex)
}
