use std::sync::Arc;
use tokio::runtime::Runtime;
use crossbeam::channel::{ Receiver, Sender };
use tracing::{ info, error, trace };

use iris_chain::{ ApiClient, HttpWalletProvider, NetworkEvent, NetworkSwitcher, Chain, QuoteRequest };
use iris_shared_types::WidgetConfig;

use crate::types::{ Request, Response };

pub mod types;

/// A simple backend to handle async tasks without blocking the gui
///
/// All the API calls that the UI can make to the backend are defined here
pub struct Backend {
    /// Send Data back to the frontend
    pub back_sender: Sender<Response>,

    /// Receive Data from the frontend
    pub front_receiver: Receiver<Request>,

    /// Route API
    pub api: ApiClient,

    /// The user's wallet
    pub wallet: Arc<HttpWalletProvider>,
}

impl Backend {
    pub fn new(back_sender: Sender<Response>, front_receiver: Receiver<Request>, config: &WidgetConfig) -> Self {
        Self {
            back_sender,
            front_receiver,
            api: ApiClient::new(config.api_base_url.clone(), config.api_key.clone()),
            wallet: Arc::new(HttpWalletProvider::new(config.wallet_rpc.clone())),
        }
    }

    /// Start the backend
    ///
    /// Runs until the frontend drops its sender
    ///
    // A wallet that never answers blocks every request queued after it
    pub fn init(&mut self) -> Result<(), anyhow::Error> {
        let rt = Runtime::new()?;
        info!("Backend Started");

        rt.block_on(async {
            while let Ok(request) = self.front_receiver.recv() {
                self.handle(request).await;
            }
        });

        info!("Frontend disconnected, backend stopped");
        Ok(())
    }

    pub async fn handle(&mut self, request: Request) {
        match request {
            Request::SwitchNetwork { chain } => {
                self.switch_network(&chain).await;
            }

            Request::GetQuote { request } => {
                match self.get_quote(&request).await {
                    Ok(_) => {}
                    Err(e) => {
                        error!("Error fetching routes: {:?}", e);
                        self.send(Response::Error(e.to_string()));
                    }
                }
            }

            Request::Reconfigure { config } => {
                trace!("Reconfiguring backend");
                self.api = ApiClient::new(config.api_base_url, config.api_key);
                self.wallet = Arc::new(HttpWalletProvider::new(config.wallet_rpc));
            }
        }
    }

    async fn switch_network(&self, chain: &Chain) {
        info!("Switching wallet to {}", chain.name);
        let sender = self.back_sender.clone();

        NetworkSwitcher::new(self.wallet.clone())
            .with_observer(Box::new(move |event: &NetworkEvent| {
                if let Err(e) = sender.send(Response::Network(event.clone())) {
                    error!("Error Sending Response: {}", e);
                }
            }))
            .switch(chain)
            .await;
    }

    async fn get_quote(&self, request: &QuoteRequest) -> Result<(), anyhow::Error> {
        let quote = self.api.quote(request).await?;
        trace!("Got {} route(s)", quote.routes.len());
        self.back_sender.send(Response::Quote(quote))?;
        Ok(())
    }

    fn send(&self, response: Response) {
        if let Err(e) = self.back_sender.send(response) {
            error!("Error Sending Response: {}", e);
        }
    }
}
