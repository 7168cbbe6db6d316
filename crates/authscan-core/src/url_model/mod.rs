//! User input to absolute detector target URL.

use crate::client::AnalyzeError;

const HTTP: &str = "http://";
const HTTPS: &str = "https://";

/// Ensures `input` starts with `http://` or `https://`, prepending `https://`
/// otherwise. No other validation: malformed hosts pass through and are
/// rejected later by the detector's own fetch.
///
/// Callers must reject empty input first (see [`prepare_target`]).
pub fn normalize_url(input: &str) -> String {
    if input.starts_with(HTTP) || input.starts_with(HTTPS) {
        input.to_string()
    } else {
        format!("{HTTPS}{input}")
    }
}

/// Caller-side check plus normalization: trims, rejects empty or
/// whitespace-only input with `AnalyzeError::Validation`, then normalizes.
pub fn prepare_target(raw: &str) -> Result<String, AnalyzeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AnalyzeError::Validation);
    }
    Ok(normalize_url(trimmed))
}
