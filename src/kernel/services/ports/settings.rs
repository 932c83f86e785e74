use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub modal: ModalSettings,
    #[serde(default)]
    pub market: MarketSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
    #[serde(default)]
    pub theme: ThemeSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalSettings {
    /// Close a modal when the click lands on its backdrop.
    #[serde(default = "default_true")]
    pub dismiss_on_backdrop: bool,
}

impl Default for ModalSettings {
    fn default() -> Self {
        Self {
            dismiss_on_backdrop: true,
        }
    }
}

/// Knobs for the bundled in-memory market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSettings {
    #[serde(default)]
    pub latency_ms: u64,
    /// Every n-th mutating call fails with `Unavailable`. `0` disables failures.
    #[serde(default)]
    pub fail_every: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrim_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_border: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_fg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_bg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_fg: Option<String>,
}

fn default_true() -> bool {
    true
}
