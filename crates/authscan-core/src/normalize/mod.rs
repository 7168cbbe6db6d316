//! Raw detector response to canonical [`NormalizedResult`].

mod detect;

pub use detect::detect_details;

use crate::model::{
    Confidence, NormalizedResult, RawAnalysisResponse, DEFAULT_METHOD, NO_ANALYSIS,
    UNKNOWN_COMPONENT_TYPE,
};

/// Format of `analyzed_at`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `High` iff the detector found a component. There is no other tier.
pub fn confidence_for(found: bool) -> Confidence {
    if found {
        Confidence::High
    } else {
        Confidence::Low
    }
}

/// Normalizes with the current local time as `analyzed_at`.
pub fn normalize(raw: RawAnalysisResponse) -> NormalizedResult {
    let now = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    normalize_at(raw, now)
}

/// Normalizes with an explicit `analyzed_at`. Never fails: absent optional
/// fields degrade to their sentinels.
pub fn normalize_at(raw: RawAnalysisResponse, analyzed_at: String) -> NormalizedResult {
    let details = detect_details(&raw.components);
    let first = raw.components.first();

    let component_type = first
        .map(|c| c.kind.clone())
        .filter(|k| !k.is_empty())
        .unwrap_or_else(|| UNKNOWN_COMPONENT_TYPE.to_string());
    let html_snippet = first.map(|c| c.html.clone()).filter(|h| !h.is_empty());
    let description = raw
        .ai_analysis
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| NO_ANALYSIS.to_string());
    let method = raw
        .method
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_METHOD.to_string());
    let detector_error = raw.error.filter(|e| !e.is_empty());

    NormalizedResult {
        url: raw.url,
        found: raw.found,
        captcha_detected: raw.captcha_detected,
        component_type,
        description,
        html_snippet,
        details,
        confidence: confidence_for(raw.found),
        analyzed_at,
        method,
        detector_error,
    }
}
