//! Detector service client.
//!
//! Uses the curl crate (libcurl) to `POST /analyze` with a JSON body and maps
//! every failure into [`AnalyzeError`]. One attempt per call; no retries.

mod classify;
mod error;
mod parse;

pub use error::{AnalyzeError, ErrorKind, ANALYZE_FAILED, MALFORMED_RESPONSE, NO_RESPONSE, SEND_FAILED};

use crate::config::AuthscanConfig;
use crate::model::RawAnalysisResponse;
use serde::Serialize;
use std::time::Duration;

/// Anything that can analyze a normalized URL. Blocking; the session runs it
/// on `spawn_blocking`.
pub trait Detector: Send + Sync + 'static {
    fn analyze(&self, url: &str) -> Result<RawAnalysisResponse, AnalyzeError>;
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "is_false")]
    use_agents: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// curl-backed client for the detector's `POST /analyze`.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    base_url: String,
    timeout: Duration,
    connect_timeout: Duration,
    use_agents: bool,
}

impl AnalysisClient {
    pub fn new(cfg: &AuthscanConfig) -> Self {
        Self {
            base_url: cfg.api_base_url.clone(),
            timeout: cfg.timeout(),
            connect_timeout: cfg.connect_timeout(),
            use_agents: cfg.use_agents,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base>/analyze`, resolved with URL join rules.
    pub fn endpoint(&self) -> Result<url::Url, AnalyzeError> {
        url::Url::parse(&self.base_url)
            .and_then(|base| base.join("analyze"))
            .map_err(|e| {
                tracing::warn!(base = %self.base_url, "invalid detector base URL: {}", e);
                AnalyzeError::send_failed()
            })
    }

    fn request_body(&self, url: &str) -> Result<Vec<u8>, AnalyzeError> {
        let req = AnalyzeRequest {
            url,
            use_agents: self.use_agents,
        };
        serde_json::to_vec(&req).map_err(|e| {
            tracing::warn!("could not encode request: {}", e);
            AnalyzeError::send_failed()
        })
    }

    /// Sends one analysis request and waits up to the configured deadline.
    ///
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    pub fn analyze(&self, url: &str) -> Result<RawAnalysisResponse, AnalyzeError> {
        let endpoint = self.endpoint()?;
        let body = self.request_body(url)?;
        tracing::info!(url, endpoint = %endpoint, use_agents = self.use_agents, "analyze request");

        let mut response: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(endpoint.as_str()).map_err(classify::setup_error)?;
        easy.post(true).map_err(classify::setup_error)?;
        easy.post_fields_copy(&body).map_err(classify::setup_error)?;
        easy.connect_timeout(self.connect_timeout)
            .map_err(classify::setup_error)?;
        easy.timeout(self.timeout).map_err(classify::setup_error)?;

        let mut list = curl::easy::List::new();
        list.append("Content-Type: application/json")
            .map_err(classify::setup_error)?;
        list.append("Accept: application/json")
            .map_err(classify::setup_error)?;
        easy.http_headers(list).map_err(classify::setup_error)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    response.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(classify::setup_error)?;
            transfer.perform().map_err(|e| classify::perform_error(&e))?;
        }

        let code = easy.response_code().map_err(|e| {
            tracing::warn!("no response code: {}", e);
            AnalyzeError::no_response()
        })?;

        let raw = parse::interpret_response(code, &response)?;
        if let Some(note) = raw.error.as_deref().filter(|s| !s.is_empty()) {
            tracing::warn!(url = %raw.url, "detector reported: {}", note);
        }
        tracing::debug!(
            url = %raw.url,
            found = raw.found,
            captcha_detected = raw.captcha_detected,
            components = raw.components.len(),
            method = raw.method.as_deref().unwrap_or("-"),
            "analyze response"
        );
        Ok(raw)
    }
}

impl Detector for AnalysisClient {
    fn analyze(&self, url: &str) -> Result<RawAnalysisResponse, AnalyzeError> {
        AnalysisClient::analyze(self, url)
    }
}
