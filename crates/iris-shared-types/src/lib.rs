pub mod config;
pub mod settings_sync;
pub mod state;

pub use config::{ThemeConfig, WidgetConfig, WidgetProps, CONFIG_ENV, DEFAULT_CONFIG_PATH};
pub use settings_sync::{SettingsSync, Watch};
pub use state::{
    custom_settings::CustomSettings,
    error::ErrorMsg,
    Action, Dispatch, WidgetState,
};
