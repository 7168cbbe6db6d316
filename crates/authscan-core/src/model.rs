//! Detector wire types and the canonical normalized result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel `component_type` when the detector returned no components.
pub const UNKNOWN_COMPONENT_TYPE: &str = "unknown";
/// Sentinel `description` when the detector returned no analysis text.
pub const NO_ANALYSIS: &str = "No analysis available";
/// Default `method` when the detector did not report one.
pub const DEFAULT_METHOD: &str = "static";

/// One detected HTML fragment believed to be part of an auth form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawComponent {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub html: String,
}

/// Body of a successful `POST /analyze`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnalysisResponse {
    pub url: String,
    pub found: bool,
    #[serde(default)]
    pub captcha_detected: bool,
    #[serde(default)]
    pub components: Vec<RawComponent>,
    #[serde(default)]
    pub ai_analysis: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    /// Detector-side failure note sent alongside an otherwise normal body.
    #[serde(default)]
    pub error: Option<String>,
}

/// Coarse detection certainty. Derived only from `found`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Low,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-presence flags, each computed over all components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    pub has_password_field: bool,
    pub has_email_field: bool,
    pub has_username_field: bool,
    pub has_submit_button: bool,
}

/// Canonical, UI-safe view of one analysis.
///
/// `component_type` and `html_snippet` come from the first component only,
/// while `details` scans every component. The two can disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedResult {
    pub url: String,
    pub found: bool,
    pub captcha_detected: bool,
    pub component_type: String,
    pub description: String,
    pub html_snippet: Option<String>,
    pub details: Details,
    pub confidence: Confidence,
    pub analyzed_at: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detector_error: Option<String>,
}
