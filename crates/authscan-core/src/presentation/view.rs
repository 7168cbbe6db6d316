//! What a result card shows, independent of the output target.

use super::{resolve, PresentationState, CAPTCHA_ALTERNATIVES};
use crate::describe::{self, RenderNode};
use crate::html_format::format_html;
use crate::model::NormalizedResult;

pub const STATUS_FOUND: &str = "Authentication component found";
pub const STATUS_NOT_FOUND: &str = "No authentication component";

const CHECK: &str = "✓";
const DASH: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCell {
    pub label: &'static str,
    pub value: String,
}

/// Pretty-printed snippet plus the length of the raw one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub formatted: String,
    pub char_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    CaptchaBlocked {
        alternatives: &'static [&'static str],
    },
    NotFound,
    FoundWithDetails {
        grid: Vec<DetailCell>,
        /// Empty when there is no description to show.
        description: Vec<RenderNode>,
        snippet: Option<Snippet>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub state: PresentationState,
    pub status: &'static str,
    pub url: String,
    pub body: ViewBody,
    pub analyzed_at: String,
    pub method: String,
    pub detector_note: Option<String>,
}

fn mark(flag: bool) -> String {
    let m = if flag { CHECK } else { DASH };
    m.to_string()
}

fn details_grid(r: &NormalizedResult) -> Vec<DetailCell> {
    vec![
        DetailCell { label: "Type", value: r.component_type.clone() },
        DetailCell { label: "Password", value: mark(r.details.has_password_field) },
        DetailCell { label: "Email", value: mark(r.details.has_email_field) },
        DetailCell { label: "Username", value: mark(r.details.has_username_field) },
        DetailCell { label: "Submit", value: mark(r.details.has_submit_button) },
        DetailCell { label: "Confidence", value: r.confidence.to_string() },
    ]
}

impl ResultView {
    pub fn build(r: &NormalizedResult) -> Self {
        let state = resolve(r);
        let body = match state {
            PresentationState::CaptchaBlocked => ViewBody::CaptchaBlocked {
                alternatives: CAPTCHA_ALTERNATIVES,
            },
            PresentationState::NotFound => ViewBody::NotFound,
            PresentationState::FoundWithDetails => ViewBody::FoundWithDetails {
                grid: details_grid(r),
                description: describe::render(Some(r.description.as_str())),
                snippet: r.html_snippet.as_deref().map(|html| Snippet {
                    formatted: format_html(Some(html)),
                    char_count: html.chars().count(),
                }),
            },
        };

        Self {
            state,
            status: if r.found { STATUS_FOUND } else { STATUS_NOT_FOUND },
            url: r.url.clone(),
            body,
            analyzed_at: r.analyzed_at.clone(),
            method: r.method.clone(),
            detector_note: r.detector_error.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RawAnalysisResponse, RawComponent};
    use crate::normalize::normalize_at;

    fn found_result(html: &str, analysis: Option<&str>) -> NormalizedResult {
        normalize_at(
            RawAnalysisResponse {
                url: "https://x.com".into(),
                found: true,
                components: vec![RawComponent {
                    kind: "login_form".into(),
                    html: html.into(),
                }],
                ai_analysis: analysis.map(str::to_owned),
                ..RawAnalysisResponse::default()
            },
            "2026-01-01 00:00:00".into(),
        )
    }

    #[test]
    fn found_view_has_grid_description_and_snippet() {
        let v = ResultView::build(&found_result(
            "<form><input type=password></form>",
            Some("- **Login** form detected"),
        ));
        assert_eq!(v.state, PresentationState::FoundWithDetails);
        assert_eq!(v.status, STATUS_FOUND);
        let ViewBody::FoundWithDetails { grid, description, snippet } = v.body else {
            panic!("expected found body");
        };
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0].value, "login_form");
        assert_eq!(grid[1].value, CHECK);
        assert_eq!(grid[2].value, DASH);
        assert_eq!(grid[5].value, "high");
        assert!(matches!(description[0], RenderNode::ListItem(_)));
        let snippet = snippet.unwrap();
        assert_eq!(snippet.char_count, 34);
        assert_eq!(snippet.formatted, "<form>\n  <input type=\"password\">\n</form>");
    }

    #[test]
    fn found_without_snippet() {
        let mut r = found_result("", None);
        r.html_snippet = None;
        let ViewBody::FoundWithDetails { snippet, description, .. } = ResultView::build(&r).body
        else {
            panic!("expected found body");
        };
        assert!(snippet.is_none());
        // The sentinel description is still shown.
        assert_eq!(description.len(), 1);
    }

    #[test]
    fn captcha_view_lists_alternatives_even_when_found() {
        let mut r = found_result("<input type=password>", None);
        r.captcha_detected = true;
        let v = ResultView::build(&r);
        assert_eq!(v.status, STATUS_FOUND);
        assert_eq!(
            v.body,
            ViewBody::CaptchaBlocked {
                alternatives: CAPTCHA_ALTERNATIVES
            }
        );
    }

    #[test]
    fn not_found_view() {
        let mut r = found_result("", None);
        r.found = false;
        let v = ResultView::build(&r);
        assert_eq!(v.status, STATUS_NOT_FOUND);
        assert_eq!(v.body, ViewBody::NotFound);
    }
}
