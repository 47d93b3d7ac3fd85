use serde::{Deserialize, Serialize};

/// Whether numeric attributes may be refined to a logarithmic axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogScaleMode {
    /// Run the spacing heuristic on every numeric attribute.
    #[default]
    Auto,
    /// Every numeric attribute stays linear.
    Never,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Attributes kept in the dataset but never turned into axes (e.g. a row label).
    pub excluded_attributes: Vec<String>,
    /// Initial color axis. Falls back to the first axis when unset or unknown.
    pub color_attribute: Option<String>,
    pub log_scale: LogScaleMode,
    pub selected_opacity: f32,
    pub deselected_opacity: f32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            excluded_attributes: vec![],
            color_attribute: None,
            log_scale: LogScaleMode::Auto,
            selected_opacity: 0.8,
            deselected_opacity: 0.1,
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(json: &str) -> eyre::Result<Self> {
        use eyre::WrapErr;
        serde_json::from_str(json).wrap_err("invalid chart configuration")
    }

    pub fn is_excluded(&self, attribute: &str) -> bool {
        self.excluded_attributes.iter().any(|a| a == attribute)
    }
}
