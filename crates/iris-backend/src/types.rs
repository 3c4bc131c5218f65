use iris_chain::{Chain, NetworkEvent, QuoteRequest, QuoteResult};
use iris_shared_types::WidgetConfig;



/// Request received from the frontend
pub enum Request {

    /// Move the wallet to another chain
    ///
    /// Never answered with an error, the outcome comes back as a [Response::Network]
    SwitchNetwork { chain: Chain },

    /// Fetch the routes for a transfer
    GetQuote { request: QuoteRequest },

    /// The config was reloaded, rebuild the api and wallet clients
    Reconfigure { config: WidgetConfig },
}

/// The response from the backend
pub enum Response {

    Network(NetworkEvent),

    Quote(QuoteResult),

    /// Something failed and should be shown to the user
    Error(String),
}
