use super::traits::ConfigSection;
use crate::error::GasimError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Labelled line block per round.
    #[default]
    Text,
    /// One JSON object per line per round.
    Json,
}

impl ConfigSection for ReportConfig {
    fn section_name() -> &'static str {
        "report"
    }

    fn validate(&self) -> Result<(), GasimError> {
        Ok(())
    }
}
