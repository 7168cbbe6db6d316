//! Turn an HTTP status and body into a detector response or a server error.

use super::error::{AnalyzeError, ANALYZE_FAILED, MALFORMED_RESPONSE};
use crate::model::RawAnalysisResponse;

/// Interpret a completed exchange. Any non-2xx status is a server error whose
/// message is the body's `error` string when present.
pub(crate) fn interpret_response(
    code: u32,
    body: &[u8],
) -> Result<RawAnalysisResponse, AnalyzeError> {
    if !(200..300).contains(&code) {
        let message = error_field(body).unwrap_or_else(|| ANALYZE_FAILED.to_string());
        tracing::warn!(status = code, "detector returned error: {}", message);
        return Err(AnalyzeError::Server(message));
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(status = code, "unparseable detector response: {}", e);
        AnalyzeError::Server(MALFORMED_RESPONSE.to_string())
    })
}

/// The string `error` field of a JSON object body, if non-empty.
fn error_field(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")?
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ErrorKind;

    #[test]
    fn success_body_parses() {
        let r = interpret_response(200, br#"{"url":"https://x.com","found":true}"#).unwrap();
        assert!(r.found);
    }

    #[test]
    fn error_status_uses_error_field() {
        let e = interpret_response(500, br#"{"error":"scraper crashed"}"#).unwrap_err();
        assert_eq!(e, AnalyzeError::Server("scraper crashed".into()));
    }

    #[test]
    fn error_status_without_field_uses_fallback() {
        for body in [&b""[..], b"<html>502</html>", br#"{"detail":"nope"}"#, br#"{"error":""}"#, br#"{"error":42}"#] {
            let e = interpret_response(502, body).unwrap_err();
            assert_eq!(e.to_string(), ANALYZE_FAILED);
        }
    }

    #[test]
    fn four_hundreds_are_server_errors_too() {
        let e = interpret_response(422, br#"{"error":"bad url"}"#).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Server);
    }

    #[test]
    fn malformed_success_body_is_server_error() {
        let e = interpret_response(200, b"not json").unwrap_err();
        assert_eq!(e.to_string(), MALFORMED_RESPONSE);
    }
}
