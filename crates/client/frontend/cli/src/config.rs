//! CLI-specific configuration for terminal UI.
use std::env;

/// Settings of the terminal interface only; shared frontend settings live in
/// `FrontendConfig`.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Environment variables:
    /// - `CLI_SIDE_PANEL_WIDTH` - Side panel width in columns (default: 42,
    ///   minimum: 20)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(width) = var("CLI_SIDE_PANEL_WIDTH").and_then(|raw| raw.parse::<u16>().ok()) {
            config.ui.side_panel_width = width.max(UiConfig::MIN_SIDE_PANEL_WIDTH);
        }

        config
    }
}

/// Layout of the two-column screen.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Width of the side panel in columns, borders included.
    pub side_panel_width: u16,
}

impl UiConfig {
    pub const MIN_SIDE_PANEL_WIDTH: u16 = 20;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            side_panel_width: 42,
        }
    }
}
