//! Owner of the display state: one analysis at a time, results replaced wholesale.
//!
//! `idle → loading → {results, failed}`. Observers watch transitions through
//! [`AnalysisSession::subscribe`]; nothing else mutates the state.

use crate::client::{AnalyzeError, Detector};
use crate::model::NormalizedResult;
use crate::normalize::normalize;
use crate::url_model::prepare_target;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    /// Most recent analysis, in insertion order.
    Results(Vec<NormalizedResult>),
    /// Exactly one message; any previous results are gone.
    Failed(String),
}

pub struct AnalysisSession<D: Detector> {
    detector: Arc<D>,
    state: watch::Sender<SessionState>,
}

impl<D: Detector> AnalysisSession<D> {
    pub fn new(detector: D) -> Self {
        let (state, _) = watch::channel(SessionState::Idle);
        Self {
            detector: Arc::new(detector),
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        matches!(*self.state.borrow(), SessionState::Loading)
    }

    /// Current results; empty unless the last attempt succeeded.
    pub fn results(&self) -> Vec<NormalizedResult> {
        match &*self.state.borrow() {
            SessionState::Results(r) => r.clone(),
            _ => Vec::new(),
        }
    }

    pub fn error(&self) -> Option<String> {
        match &*self.state.borrow() {
            SessionState::Failed(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    fn transition(&self, next: SessionState) {
        let label = match &next {
            SessionState::Idle => "idle",
            SessionState::Loading => "loading",
            SessionState::Results(_) => "results",
            SessionState::Failed(_) => "failed",
        };
        tracing::debug!(state = label, "session transition");
        self.state.send_replace(next);
    }

    /// Runs one analysis for `input` and returns its outcome.
    ///
    /// `&mut self` keeps a second submission from starting while one is in
    /// flight. The detector's own deadline is the only way an attempt ends
    /// early; there is no cancel.
    pub async fn submit(&mut self, input: &str) -> Result<NormalizedResult, AnalyzeError> {
        let outcome = self.run(input).await;
        match &outcome {
            Ok(result) => self.transition(SessionState::Results(vec![result.clone()])),
            Err(e) => {
                tracing::info!(kind = ?e.kind(), "analysis failed: {}", e);
                self.transition(SessionState::Failed(e.to_string()));
            }
        }
        outcome
    }

    async fn run(&self, input: &str) -> Result<NormalizedResult, AnalyzeError> {
        let url = prepare_target(input)?;
        self.transition(SessionState::Loading);

        let detector = Arc::clone(&self.detector);
        let target = url.clone();
        let raw = tokio::task::spawn_blocking(move || detector.analyze(&target))
            .await
            .map_err(|e| {
                tracing::error!(url = %url, "analysis task failed: {}", e);
                AnalyzeError::send_failed()
            })??;

        Ok(normalize(raw))
    }
}
