pub mod custom_settings;
pub mod error;

use tracing::trace;

use self::{custom_settings::CustomSettings, error::ErrorMsg};


/// Every change that can be made to the [WidgetState]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show an error in the error modal, replacing the current one
    SetError(String),

    /// Dismiss the error modal
    ClearError,

    SetCustomSourceNetworks(Option<Vec<u64>>),

    SetCustomDestNetworks(Option<Vec<u64>>),

    SetDefaultSourceNetwork(Option<u64>),

    SetDefaultDestNetwork(Option<u64>),
}

/// Something that accepts [Action]s
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

/// State shared by the widget components
///
/// Owned by the GUI thread and only changed through [Dispatch::dispatch]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    error: ErrorMsg,
    custom_settings: CustomSettings,
}

impl WidgetState {
    pub fn error(&self) -> &ErrorMsg {
        &self.error
    }

    pub fn custom_settings(&self) -> &CustomSettings {
        &self.custom_settings
    }
}

impl Dispatch for WidgetState {
    fn dispatch(&mut self, action: Action) {
        trace!("Dispatch {:?}", action);

        match action {
            Action::SetError(msg) => self.error.show(msg),
            Action::ClearError => self.error.close(),
            Action::SetCustomSourceNetworks(networks) => {
                self.custom_settings.source_networks = networks;
            }
            Action::SetCustomDestNetworks(networks) => {
                self.custom_settings.dest_networks = networks;
            }
            Action::SetDefaultSourceNetwork(network) => {
                self.custom_settings.default_source_network = network;
            }
            Action::SetDefaultDestNetwork(network) => {
                self.custom_settings.default_dest_network = network;
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_slot_set_and_dismiss() {
        let mut state = WidgetState::default();

        state.dispatch(Action::SetError("Wallet not connected".to_string()));
        assert_eq!(state.error().msg(), Some("Wallet not connected"));

        state.dispatch(Action::ClearError);
        assert!(!state.error().is_open());

        // dismissing twice changes nothing
        let before = state.clone();
        state.dispatch(Action::ClearError);
        assert_eq!(state, before);
    }

    #[test]
    fn settings_actions_replace_fields() {
        let mut state = WidgetState::default();

        state.dispatch(Action::SetCustomSourceNetworks(Some(vec![1, 137])));
        state.dispatch(Action::SetDefaultDestNetwork(Some(10)));
        assert_eq!(state.custom_settings().source_networks, Some(vec![1, 137]));
        assert_eq!(state.custom_settings().default_dest_network, Some(10));

        state.dispatch(Action::SetCustomSourceNetworks(None));
        assert_eq!(state.custom_settings().source_networks, None);
        assert_eq!(state.custom_settings().default_dest_network, Some(10));
        assert!(!state.error().is_open());
    }
}
