use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vivace/config.toml` or `~/.config/vivace/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `VIVACE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub report: ReportSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report: ReportSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Separator line printed between demo steps.
    pub separator: String,

    /// Prefix used to indent track report lines.
    pub indent: String,

    /// Whether track reports include a `Released:` line.
    pub show_release_date: bool,

    /// Date format for the `Released:` line (chrono format string).
    pub date_format: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            separator: "<------------------------------->".to_string(),
            indent: "\t".to_string(),
            show_release_date: false,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}
