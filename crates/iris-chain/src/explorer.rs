use std::{convert::Infallible, fmt, str::FromStr};


/// What an explorer link points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplorerDataType {
    Transaction,
    Token,
    #[default]
    Address,
    Block,
}

impl ExplorerDataType {
    /// The path segment the explorers use for this kind of data
    pub fn segment(&self) -> &'static str {
        match self {
            Self::Transaction => "tx",
            Self::Token => "token",
            Self::Block => "block",
            Self::Address => "address",
        }
    }
}

impl FromStr for ExplorerDataType {
    type Err = Infallible;

    /// Anything unknown is treated as an address
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "transaction" => Self::Transaction,
            "token" => Self::Token,
            "block" => Self::Block,
            _ => Self::Address,
        })
    }
}

impl fmt::Display for ExplorerDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Transaction => "transaction",
            Self::Token => "token",
            Self::Address => "address",
            Self::Block => "block",
        };
        f.write_str(name)
    }
}

/// Build a block explorer link, eg. `https://etherscan.io/tx/0x..`
pub fn get_explorer_link(base_url: &str, data: &str, kind: ExplorerDataType) -> String {
    format!("{}/{}/{}", base_url, kind.segment(), data)
}
