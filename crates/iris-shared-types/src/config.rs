use std::path::{Path, PathBuf};

use anyhow::Context;
use iris_chain::{Chain, Currency, NativeCurrency};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Environment variable overriding [DEFAULT_CONFIG_PATH]
pub const CONFIG_ENV: &str = "IRIS_CONFIG";

pub const DEFAULT_CONFIG_PATH: &str = "widget.json";


/// Props given by the host of the widget
///
/// Every field is optional, `None` means "no restriction" / "no default"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetProps {
    #[serde(default)]
    pub source_networks: Option<Vec<u64>>,

    #[serde(default)]
    pub dest_networks: Option<Vec<u64>>,

    #[serde(default)]
    pub default_source_network: Option<u64>,

    #[serde(default)]
    pub default_dest_network: Option<u64>,
}

/// Colors as css `rgb(..)` strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub accent: String,
    pub error: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "rgb(145, 60, 167)".to_string(),
            error: "rgb(239, 68, 68)".to_string(),
        }
    }
}

/// Everything the widget loads from `widget.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Key sent in the `API-KEY` header of every route API request
    pub api_key: String,

    pub api_base_url: String,

    /// JSON-RPC endpoint of the wallet
    pub wallet_rpc: String,

    /// Chains the widget knows about
    pub chains: Vec<Chain>,

    /// Token list
    pub tokens: Vec<Currency>,

    pub props: WidgetProps,

    pub theme: ThemeConfig,
}

impl WidgetConfig {
    /// Where the config is read from, `$IRIS_CONFIG` or `widget.json`
    pub fn path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("parsing {}", path.display()))?;
        info!("Loaded widget config from {}", path.display());
        Ok(config)
    }

    /// Load the config, falling back to the defaults if it can't be read
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Error Loading widget config: {:?}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), anyhow::Error> {
        let path = path.as_ref();
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    pub fn chain(&self, chain_id: u64) -> Option<&Chain> {
        self.chains.iter().find(|chain| chain.chain_id == chain_id)
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: "https://api.socket.tech/v2".to_string(),
            wallet_rpc: "http://127.0.0.1:1248".to_string(),
            chains: default_chains(),
            tokens: Vec::new(),
            props: WidgetProps::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Supported networks when the config doesn't list any
fn default_chains() -> Vec<Chain> {
    let eth = || NativeCurrency::new("Ether", "ETH", 18);

    vec![
        Chain::new(1, "Ethereum", eth())
            .with_rpcs(vec!["https://cloudflare-eth.com".to_string()])
            .with_explorers(vec!["https://etherscan.io".to_string()]),
        Chain::new(10, "Optimism", eth())
            .with_rpcs(vec!["https://mainnet.optimism.io".to_string()])
            .with_explorers(vec!["https://optimistic.etherscan.io".to_string()]),
        Chain::new(56, "BNB Smart Chain", NativeCurrency::new("BNB", "BNB", 18))
            .with_rpcs(vec!["https://bsc-dataseed.binance.org".to_string()])
            .with_explorers(vec!["https://bscscan.com".to_string()]),
        Chain::new(137, "Polygon", NativeCurrency::new("MATIC", "MATIC", 18))
            .with_rpcs(vec!["https://polygon-rpc.com".to_string()])
            .with_explorers(vec!["https://polygonscan.com".to_string()]),
        Chain::new(8453, "Base", eth())
            .with_rpcs(vec!["https://mainnet.base.org".to_string()])
            .with_explorers(vec!["https://basescan.org".to_string()]),
        Chain::new(42161, "Arbitrum", eth())
            .with_rpcs(vec!["https://arb1.arbitrum.io/rpc".to_string()])
            .with_explorers(vec!["https://arbiscan.io".to_string()]),
    ]
}
