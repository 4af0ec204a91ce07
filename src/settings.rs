use serde::{Deserialize, Serialize};

use crate::{DEFAULT_BIRTH_DATE, ExportRequest, Language, PaperSize, Theme};

/// User-facing preferences. Missing fields take their defaults, so a host can
/// load a partial document in any serde format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme:      Theme,
    pub language:   Language,
    pub paper_size: PaperSize,
    /// Raw `YYYY-MM-DD` text, possibly empty
    pub birth_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Unknown {kind}: {value:?}")]
    Unknown { kind: &'static str, value: String },
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme:      Theme::default(),
            language:   Language::default(),
            paper_size: PaperSize::default(),
            birth_date: DEFAULT_BIRTH_DATE.to_owned(),
        }
    }
}

impl Settings {
    pub const fn export_request(&self) -> ExportRequest {
        ExportRequest {
            paper: self.paper_size,
            theme: self.theme,
        }
    }
}
