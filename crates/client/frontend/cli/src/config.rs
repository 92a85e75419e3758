//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend map configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Overrides the platform log directory.
    pub log_dir: Option<PathBuf>,
    /// Names the log file; a timestamp is used when unset.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_CELL_WIDTH_PX` - Surface pixels per terminal column (default: 8)
    /// - `CLI_CELL_HEIGHT_PX` - Surface pixels per terminal row (default: 16)
    /// - `CLI_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `MAP_SESSION_ID` - Session name used in the log file name
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<f64>("CLI_CELL_WIDTH_PX").filter(|v| v.is_finite()) {
            config.ui.cell_width_px = width.max(1.0);
        }
        if let Some(height) = read_env::<f64>("CLI_CELL_HEIGHT_PX").filter(|v| v.is_finite()) {
            config.ui.cell_height_px = height.max(1.0);
        }

        config.log_dir = env::var_os("CLI_LOG_DIR").map(PathBuf::from);
        config.session_id = env::var("MAP_SESSION_ID").ok().filter(|id| !id.trim().is_empty());

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiConfig {
    /// Width of one terminal cell in surface pixels.
    pub cell_width_px: f64,
    /// Height of one terminal cell in surface pixels.
    pub cell_height_px: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            cell_width_px: 8.0,
            cell_height_px: 16.0,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
