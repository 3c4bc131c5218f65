use eframe::{egui, CreationContext};
use egui::{Context, Style};
use std::time::Duration;

use crossbeam::channel::{unbounded, Receiver, Sender};

use crate::{
    gui::{error_modal::error_modal, misc::{button, rich_text}, GUI},
    theme::IrisTheme,
};

use iris_backend::{
    types::{Request, Response},
    Backend,
};
use iris_chain::NetworkEvent;
use iris_shared_types::{Action, Dispatch, SettingsSync, WidgetConfig, WidgetState};

use tracing_subscriber::{fmt, layer::SubscriberExt, prelude::*, util::SubscriberInitExt, EnvFilter};

use tracing::{error, info, trace};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::Registry;

pub const WIDTH: f32 = 520.0;
pub const HEIGHT: f32 = 760.0;

/// The main application struct
pub struct IrisApp {
    /// The GUI components of the application
    pub gui: GUI,

    /// Error slot and custom settings
    pub state: WidgetState,

    /// Pushes the config props into the state
    pub settings_sync: SettingsSync,

    pub config: WidgetConfig,

    pub theme: IrisTheme,

    /// Send Data to backend
    pub front_sender: Option<Sender<Request>>,

    /// Receive Data from backend
    pub back_receiver: Option<Receiver<Response>>,

    /// Log writers are flushed when these are dropped
    _guards: (WorkerGuard, WorkerGuard),
}

fn setup_logging() -> (WorkerGuard, WorkerGuard) {
    // Setup for file appenders
    let trace_appender = tracing_appender::rolling::daily("./logs", "trace.log");
    let output_appender = tracing_appender::rolling::daily("./logs", "output.log");

    // Creating non-blocking writers
    let (trace_writer, trace_guard) = tracing_appender::non_blocking(trace_appender);
    let (output_writer, output_guard) = tracing_appender::non_blocking(output_appender);

    // Defining filters
    let console_filter = EnvFilter::new("iris=info,iris_gui=info,iris_chain=info,iris_backend=info,iris_shared_types=info");
    let trace_filter = EnvFilter::new("iris=trace,iris_gui=trace,iris_chain=trace,iris_backend=trace,iris_shared_types=trace");
    let output_filter = EnvFilter::new("iris=info,iris_gui=info,iris_chain=info,iris_backend=info,iris_shared_types=info");

    // Setting up layers
    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_filter(console_filter);
    let trace_layer = fmt::layer()
        .with_writer(trace_writer)
        .with_filter(trace_filter);
    let output_layer = fmt::layer()
        .with_writer(output_writer)
        .with_filter(output_filter);

    // Applying configuration
    Registry::default()
        .with(trace_layer)
        .with(console_layer)
        .with(output_layer)
        .init();

    (trace_guard, output_guard)
}

impl IrisApp {
    pub fn new(cc: &CreationContext) -> Self {
        let guards = setup_logging();

        let config = WidgetConfig::load_or_default(WidgetConfig::path());
        let theme = IrisTheme::new(&config.theme);

        let mut app = Self {
            gui: GUI::default(),
            state: WidgetState::default(),
            settings_sync: SettingsSync::new(),
            config,
            theme,
            front_sender: None,
            back_receiver: None,
            _guards: guards,
        };

        app.config_style(&cc.egui_ctx);

        let (front_sender, front_receiver) = unbounded();
        let (back_sender, back_receiver) = unbounded();

        app.gui.sender = Some(front_sender.clone());

        let backend_config = app.config.clone();
        std::thread::spawn(move || {
            let mut backend = Backend::new(back_sender, front_receiver, &backend_config);
            if let Err(e) = backend.init() {
                error!("Error Starting Backend: {:?}", e);
            }
        });

        app.front_sender = Some(front_sender);
        app.back_receiver = Some(back_receiver);

        app.sync_settings();
        info!("Iris started with {} chain(s)", app.config.chains.len());

        app
    }

    fn config_style(&self, ctx: &Context) {
        let style = Style {
            visuals: self.theme.visuals.clone(),
            ..Style::default()
        };
        ctx.set_style(style);
    }

    /// Send a request to backend
    fn send_request(&mut self, request: Request) {
        if let Some(sender) = &self.front_sender {
            if let Err(e) = sender.send(request) {
                self.state.dispatch(Action::SetError(e.to_string()));
            }
        }
    }

    /// Push changed props into the state, re-applying the defaults if anything changed
    fn sync_settings(&mut self) {
        if self.settings_sync.sync(&self.config.props, &mut self.state) > 0 {
            self.gui.apply_settings(self.state.custom_settings(), &self.config.chains);
        }
    }

    /// Read the config file again
    fn reload_config(&mut self, ctx: &Context) {
        match WidgetConfig::load(WidgetConfig::path()) {
            Ok(config) => {
                self.theme = IrisTheme::new(&config.theme);
                self.config_style(ctx);
                self.send_request(Request::Reconfigure { config: config.clone() });
                self.config = config;
                self.sync_settings();
            }
            Err(e) => {
                error!("Error Reloading widget config: {:?}", e);
                self.state.dispatch(Action::SetError(format!("{:#}", e)));
            }
        }
    }

    fn receive(&mut self) {
        let Some(receiver) = &self.back_receiver else {
            return;
        };

        while let Ok(response) = receiver.try_recv() {
            apply_response(&mut self.gui, &mut self.state, &self.config, response);
        }
    }
}

/// Update the gui and state with a response from the backend
pub fn apply_response(gui: &mut GUI, state: &mut WidgetState, config: &WidgetConfig, response: Response) {
    match response {
        Response::Error(msg) => {
            state.dispatch(Action::SetError(msg));
        }

        Response::Quote(quote) => {
            trace!("Received {} route(s)", quote.routes.len());
            gui.selected_route = 0;
            gui.current_tx = quote
                .routes
                .first()
                .and_then(|route| route.user_txs.first())
                .map(|tx| tx.user_tx_index);
            gui.status = quote.routes.is_empty().then(|| "No routes found".to_string());
            gui.routes = quote.routes;
        }

        Response::Network(event) => {
            gui.status = Some(network_status(&event, config));
        }
    }
}

/// Short text for the status line
pub fn network_status(event: &NetworkEvent, config: &WidgetConfig) -> String {
    let name = |chain_id: u64| {
        config
            .chain(chain_id)
            .map(|chain| chain.name.clone())
            .unwrap_or_else(|| format!("chain {}", chain_id))
    };

    match event {
        NetworkEvent::Switched { chain_id } => format!("Switched to {}", name(*chain_id)),
        NetworkEvent::Added { chain_id } => format!("Added {} to the wallet", name(*chain_id)),
        NetworkEvent::AddFailed { chain_id, error } => {
            format!("Could not add {}: {}", name(*chain_id), error)
        }
        NetworkEvent::SwitchFailed { chain_id, error } => {
            format!("Could not switch to {}: {}", name(*chain_id), error)
        }
    }
}

// Main Event Loop Of The Window
// This is where we draw the UI
impl eframe::App for IrisApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.receive();
        self.sync_settings();

        egui::TopBottomPanel::top("top_panel")
            .frame(self.theme.default_panel_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(rich_text("Iris", 18.0).color(self.theme.colors.accent));
                    if ui.add(button(rich_text("Reload Config", 13.0))).clicked() {
                        self.reload_config(ui.ctx());
                    }
                });
            });

        egui::CentralPanel::default()
            .frame(self.theme.default_panel_frame)
            .show(ctx, |ui| {
                ui.vertical_centered_justified(|ui| {
                    self.gui.bridge_ui(ui, &self.config, &mut self.state);
                    self.gui.routes_ui(ui, &self.config, &self.theme);
                });
            });

        error_modal(ctx, &mut self.state, &self.theme);

        // keep polling the backend
        ctx.request_repaint_after(Duration::from_millis(250));
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use iris_chain::{ProviderError, QuoteResult};

    #[test]
    fn backend_error_fills_the_error_slot() {
        let mut gui = GUI::default();
        let mut state = WidgetState::default();
        let config = WidgetConfig::default();

        apply_response(&mut gui, &mut state, &config, Response::Error("quote failed".to_string()));
        assert_eq!(state.error().msg(), Some("quote failed"));
    }

    #[test]
    fn empty_quote_sets_status() {
        let mut gui = GUI { current_tx: Some(3), ..GUI::default() };
        let mut state = WidgetState::default();
        let config = WidgetConfig::default();

        apply_response(&mut gui, &mut state, &config, Response::Quote(QuoteResult { routes: vec![] }));
        assert!(gui.routes.is_empty());
        assert_eq!(gui.current_tx, None);
        assert_eq!(gui.status.as_deref(), Some("No routes found"));
        assert!(!state.error().is_open());
    }

    #[test]
    fn wallet_failures_stay_out_of_the_error_slot() {
        let mut gui = GUI::default();
        let mut state = WidgetState::default();
        let config = WidgetConfig::default();

        let event = NetworkEvent::SwitchFailed {
            chain_id: 137,
            error: ProviderError::rpc(4001, "User rejected the request"),
        };
        apply_response(&mut gui, &mut state, &config, Response::Network(event));

        assert!(!state.error().is_open());
        let status = gui.status.unwrap();
        assert!(status.starts_with("Could not switch to"), "{}", status);
    }

    #[test]
    fn unknown_chain_is_named_by_id() {
        let config = WidgetConfig::default();
        let status = network_status(&NetworkEvent::Added { chain_id: 999_999 }, &config);
        assert_eq!(status, "Added chain 999999 to the wallet");
    }
}
