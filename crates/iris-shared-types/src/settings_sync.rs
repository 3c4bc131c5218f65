use tracing::debug;

use crate::{
    config::WidgetProps,
    state::{Action, Dispatch},
};


/// Remembers the last seen value of a field
#[derive(Debug, Clone, Default)]
pub struct Watch<T> {
    last: Option<T>,
}

impl<T: Clone + PartialEq> Watch<T> {
    /// Returns true (and remembers `value`) if `value` differs from the last seen one
    ///
    /// The first call always reports a change
    pub fn changed(&mut self, value: &T) -> bool {
        if self.last.as_ref() == Some(value) {
            return false;
        }
        self.last = Some(value.clone());
        true
    }
}

/// Keeps the custom settings of the [crate::WidgetState] in line with the [WidgetProps]
///
/// Each prop is watched on its own and dispatches its own action only when it changes
#[derive(Debug, Clone, Default)]
pub struct SettingsSync {
    source_networks: Watch<Option<Vec<u64>>>,
    dest_networks: Watch<Option<Vec<u64>>>,
    default_source_network: Watch<Option<u64>>,
    default_dest_network: Watch<Option<u64>>,
}

impl SettingsSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call with the current props, eg. every frame or after the config is reloaded
    ///
    /// Returns how many actions were dispatched
    pub fn sync<D: Dispatch>(&mut self, props: &WidgetProps, store: &mut D) -> usize {
        let mut dispatched = 0;

        if self.source_networks.changed(&props.source_networks) {
            store.dispatch(Action::SetCustomSourceNetworks(props.source_networks.clone()));
            dispatched += 1;
        }

        if self.dest_networks.changed(&props.dest_networks) {
            store.dispatch(Action::SetCustomDestNetworks(props.dest_networks.clone()));
            dispatched += 1;
        }

        if self.default_source_network.changed(&props.default_source_network) {
            store.dispatch(Action::SetDefaultSourceNetwork(props.default_source_network));
            dispatched += 1;
        }

        if self.default_dest_network.changed(&props.default_dest_network) {
            store.dispatch(Action::SetDefaultDestNetwork(props.default_dest_network));
            dispatched += 1;
        }

        if dispatched > 0 {
            debug!("Synced {} custom setting(s)", dispatched);
        }

        dispatched
    }
}
