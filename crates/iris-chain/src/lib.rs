pub mod api;
pub mod chain;
pub mod currency;
pub mod explorer;
pub mod route;
pub mod utils;
pub mod wallet;


// * Re-exports

pub use alloy;
pub use serde_json;

pub use api::{fetcher, ApiClient, ApiError, ApiResponse, QuoteRequest, QuoteResult};
pub use chain::{Chain, NativeCurrency};
pub use currency::{filter_tokens_by_chain, Currency};
pub use explorer::{get_explorer_link, ExplorerDataType};
pub use route::{get_swap_tx, Route, Step, SwapTx, UserTx, UserTxType};
pub use utils::{
    amount::{format_currency_amount, parse_currency_amount, truncate_decimal_value, AmountError},
    misc::{format_rgb, time_in_minutes},
};
pub use wallet::{
    add_network, handle_network_change, http::HttpWalletProvider, NetworkEvent, NetworkObserver,
    NetworkSwitcher, ProviderError, WalletProvider,
};
