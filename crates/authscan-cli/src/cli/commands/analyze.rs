//! `authscan analyze <url>` – run one analysis and print the result card.

use anyhow::Result;
use authscan_core::client::AnalysisClient;
use authscan_core::config::AuthscanConfig;
use authscan_core::presentation::{render_html, render_text, ResultView};
use authscan_core::session::{AnalysisSession, SessionState};

use crate::cli::OutputFormat;

pub async fn run_analyze(cfg: &AuthscanConfig, url: &str, format: OutputFormat) -> Result<()> {
    let mut session = AnalysisSession::new(AnalysisClient::new(cfg));

    let mut rx = session.subscribe();
    let progress = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            if matches!(*rx.borrow_and_update(), SessionState::Loading) {
                eprintln!("Analyzing...");
            } else {
                break;
            }
        }
    });

    let outcome = session.submit(url).await;
    let _ = progress.await;
    let result = outcome?;

    match format {
        OutputFormat::Text => print!("{}", render_text(&ResultView::build(&result))),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Html => print!("{}", render_html(&ResultView::build(&result))),
    }
    Ok(())
}
