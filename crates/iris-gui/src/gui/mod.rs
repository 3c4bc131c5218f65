use std::str::FromStr;

use anyhow::{anyhow, Context};
use crossbeam::channel::Sender;
use eframe::egui::{ComboBox, Ui};
use tracing::trace;

use iris_backend::types::Request;
use iris_chain::{
    alloy::primitives::Address, filter_tokens_by_chain, parse_currency_amount, Chain, Currency,
    QuoteRequest, Route,
};
use iris_shared_types::{Action, CustomSettings, Dispatch, WidgetConfig, WidgetState};

use misc::{button, rich_text, text_edit_s};

pub mod error_modal;
pub mod misc;
pub mod route_view;

/// The Graphical User Interface for [crate::IrisApp]
#[derive(Default)]
pub struct GUI {
    /// Send data to backend
    pub sender: Option<Sender<Request>>,

    pub source_chain: Option<u64>,

    pub dest_chain: Option<u64>,

    pub source_token: Option<Currency>,

    pub dest_token: Option<Currency>,

    /// Amount to bridge in readable units
    pub amount: String,

    /// Address of the connected wallet
    pub user_address: String,

    /// Routes of the last quote
    pub routes: Vec<Route>,

    pub selected_route: usize,

    /// Index of the user transaction we are at in the selected route
    pub current_tx: Option<u32>,

    /// Last wallet status, eg. "Switched to Polygon"
    pub status: Option<String>,
}

impl GUI {
    /// Send a request to the backend
    pub fn send_request(&self, request: Request, state: &mut WidgetState) {
        if let Some(sender) = &self.sender {
            if let Err(e) = sender.send(request) {
                state.dispatch(Action::SetError(e.to_string()));
            }
        }
    }

    /// Make sure the selected chains are allowed by the custom settings
    ///
    /// Called after the settings changed, an allowed selection is kept
    pub fn apply_settings(&mut self, settings: &CustomSettings, chains: &[Chain]) {
        let source_allowed = settings.source_chains(chains);
        if !source_allowed.iter().any(|chain| Some(chain.chain_id) == self.source_chain) {
            self.source_chain = settings.default_source(chains).map(|chain| chain.chain_id);
            self.source_token = None;
        }

        let dest_allowed = settings.dest_chains(chains);
        if !dest_allowed.iter().any(|chain| Some(chain.chain_id) == self.dest_chain) {
            self.dest_chain = settings.default_dest(chains).map(|chain| chain.chain_id);
            self.dest_token = None;
        }
    }

    /// Build the quote request from the current selection
    pub fn quote_request(&self) -> Result<QuoteRequest, anyhow::Error> {
        let source = self.source_token.as_ref().context("Select a token to send")?;
        let dest = self.dest_token.as_ref().context("Select a token to receive")?;

        if self.amount.is_empty() {
            return Err(anyhow!("Enter an amount"));
        }
        let from_amount = parse_currency_amount(&self.amount, source.decimals)?;

        let user_address = Address::from_str(self.user_address.trim())
            .map_err(|_| anyhow!("Invalid wallet address"))?;

        Ok(QuoteRequest {
            from_chain_id: source.chain_id,
            from_token_address: source.address,
            to_chain_id: dest.chain_id,
            to_token_address: dest.address,
            from_amount,
            user_address,
        })
    }

    /// Render the bridge form
    pub fn bridge_ui(&mut self, ui: &mut Ui, config: &WidgetConfig, state: &mut WidgetState) {
        let settings = state.custom_settings().clone();

        ui.vertical_centered(|ui| {
            ui.label(rich_text("Bridge", 20.0));
        });
        ui.add_space(10.0);

        // * Source
        ui.label(rich_text("From", 15.0));
        ui.horizontal(|ui| {
            let previous = self.source_chain;
            chain_select(ui, "source_chain", &settings.source_chains(&config.chains), &mut self.source_chain);

            if self.source_chain != previous {
                self.source_token = None;
                if let Some(chain) = self.source_chain.and_then(|id| config.chain(id)) {
                    trace!("Source chain changed to {}", chain.name);
                    self.send_request(Request::SwitchNetwork { chain: chain.clone() }, state);
                }
            }

            if let Some(chain_id) = self.source_chain {
                token_select(ui, "source_token", &filter_tokens_by_chain(&config.tokens, chain_id), &mut self.source_token);
            }
        });
        ui.add(text_edit_s(&mut self.amount, 200.0, "0.0"));
        ui.add_space(10.0);

        // * Destination
        ui.label(rich_text("To", 15.0));
        ui.horizontal(|ui| {
            let previous = self.dest_chain;
            chain_select(ui, "dest_chain", &settings.dest_chains(&config.chains), &mut self.dest_chain);
            if self.dest_chain != previous {
                self.dest_token = None;
            }

            if let Some(chain_id) = self.dest_chain {
                token_select(ui, "dest_token", &filter_tokens_by_chain(&config.tokens, chain_id), &mut self.dest_token);
            }
        });
        ui.add_space(10.0);

        ui.label(rich_text("Wallet Address", 15.0));
        ui.add(text_edit_s(&mut self.user_address, 320.0, "0x..."));
        ui.add_space(15.0);

        ui.horizontal(|ui| {
            if ui.add(button(rich_text("Get Routes", 15.0))).clicked() {
                match self.quote_request() {
                    Ok(request) => {
                        self.routes.clear();
                        self.current_tx = None;
                        self.send_request(Request::GetQuote { request }, state);
                    }
                    Err(e) => state.dispatch(Action::SetError(e.to_string())),
                }
            }

            if let Some(status) = &self.status {
                ui.label(rich_text(status, 13.0));
            }
        });
    }
}

fn chain_select(ui: &mut Ui, id: &str, chains: &[&Chain], selected: &mut Option<u64>) {
    let selected_text = chains
        .iter()
        .find(|chain| Some(chain.chain_id) == *selected)
        .map(|chain| chain.name.clone())
        .unwrap_or_else(|| "Select Network".to_string());

    ComboBox::from_id_source(id)
        .selected_text(selected_text)
        .width(150.0)
        .show_ui(ui, |ui| {
            for chain in chains {
                ui.selectable_value(selected, Some(chain.chain_id), chain.name.as_str());
            }
        });
}

fn token_select(ui: &mut Ui, id: &str, tokens: &[Currency], selected: &mut Option<Currency>) {
    let selected_text = selected
        .as_ref()
        .map(|token| token.symbol.clone())
        .unwrap_or_else(|| "Select Token".to_string());

    ComboBox::from_id_source(id)
        .selected_text(selected_text)
        .width(100.0)
        .show_ui(ui, |ui| {
            for token in tokens {
                ui.selectable_value(selected, Some(token.clone()), token.symbol.as_str());
            }
        });
}
