use alloy::primitives::Address;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::trace;

use crate::route::Route;

/// Header the route API reads the key from
pub const API_KEY_HEADER: &str = "API-KEY";


#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api returned an unsuccessful response for {0}")]
    Unsuccessful(String),
}

/// Envelope of every route API answer
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Missing or `null` when the call was unsuccessful
    pub result: Option<T>,
}

/// `GET` a url with the api key header and parse the body as json
pub async fn fetcher<T: DeserializeOwned>(client: &Client, url: &str, api_key: &str) -> Result<T, ApiError> {
    trace!("GET {}", url);
    let response = client
        .get(url)
        .header(API_KEY_HEADER, api_key)
        .send()
        .await?;
    Ok(response.json::<T>().await?)
}

/// Parameters of a route quote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub from_chain_id: u64,
    pub from_token_address: Address,
    pub to_chain_id: u64,
    pub to_token_address: Address,

    /// Amount in the smallest unit of the input token
    pub from_amount: String,

    pub user_address: Address,
}

impl QuoteRequest {
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/quote?fromChainId={}&fromTokenAddress={}&toChainId={}&toTokenAddress={}&fromAmount={}&userAddress={}&uniqueRoutesPerBridge=true&sort=output",
            base_url.trim_end_matches('/'),
            self.from_chain_id,
            self.from_token_address,
            self.to_chain_id,
            self.to_token_address,
            self.from_amount,
            self.user_address,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// Client for the route API
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// `GET` an api url and unwrap the response envelope
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response: ApiResponse<T> = fetcher(&self.client, url, &self.api_key).await?;
        match response.result {
            Some(result) if response.success => Ok(result),
            _ => Err(ApiError::Unsuccessful(url.to_string())),
        }
    }

    /// Fetch the available routes for a transfer
    pub async fn quote(&self, request: &QuoteRequest) -> Result<QuoteResult, ApiError> {
        let url = request.url(&self.base_url);
        self.get::<QuoteResult>(&url).await
    }
}
