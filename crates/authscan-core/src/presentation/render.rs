//! Plain-text and HTML renderings of a [`ResultView`].
//!
//! The HTML target escapes every value that came from the detector; the only
//! markup in the output is built here.

use super::view::{ResultView, ViewBody, STATUS_FOUND};
use super::{CAPTCHA_MESSAGE, CAPTCHA_TITLE, NOT_FOUND_MESSAGE};
use crate::describe::{self, RenderNode};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use url::Url;

/// Terminal rendering.
pub fn render_text(view: &ResultView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n\n", view.status, view.url));

    match &view.body {
        ViewBody::CaptchaBlocked { alternatives } => {
            out.push_str(&format!("{CAPTCHA_TITLE}\n{CAPTCHA_MESSAGE}\n"));
            out.push_str("Alternatives:\n");
            for alt in alternatives.iter() {
                out.push_str(&format!("  - {alt}\n"));
            }
        }
        ViewBody::NotFound => {
            out.push_str(&format!("{NOT_FOUND_MESSAGE}\n"));
        }
        ViewBody::FoundWithDetails {
            grid,
            description,
            snippet,
        } => {
            out.push_str("Details\n");
            for cell in grid {
                out.push_str(&format!("  {:<12}{}\n", cell.label, cell.value));
            }
            if !description.is_empty() {
                out.push('\n');
                for node in description {
                    match node {
                        RenderNode::Text(runs) => {
                            out.push_str(&format!("{}\n", describe::plain_text(runs)));
                        }
                        RenderNode::ListItem(runs) => {
                            out.push_str(&format!("  • {}\n", describe::plain_text(runs)));
                        }
                        RenderNode::Spacer => out.push('\n'),
                    }
                }
            }
            if let Some(s) = snippet {
                out.push_str(&format!(
                    "\nHTML Snippet ({} characters)\n{}\n",
                    s.char_count, s.formatted
                ));
            }
        }
    }

    if let Some(note) = &view.detector_note {
        out.push_str(&format!("\nDetector note: {note}\n"));
    }
    out.push_str(&format!("\n{} ({})\n", view.analyzed_at, view.method));
    out
}

/// Only web URLs become links; anything else (`javascript:`, `data:`, junk)
/// is shown as text.
fn is_linkable(url: &str) -> bool {
    Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Self-contained HTML fragment for one result card.
pub fn render_html(view: &ResultView) -> String {
    let mut out = String::new();
    let card_class = if view.status == STATUS_FOUND {
        "found"
    } else {
        "not-found"
    };
    out.push_str(&format!("<div class=\"result-card {card_class}\">\n"));
    out.push_str(&format!("<p class=\"status\">{}</p>\n", text(view.status)));
    if is_linkable(&view.url) {
        out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
            attr(&view.url),
            text(&view.url)
        ));
    } else {
        out.push_str(&format!("<span class=\"url\">{}</span>\n", text(&view.url)));
    }

    match &view.body {
        ViewBody::CaptchaBlocked { alternatives } => {
            out.push_str("<div class=\"captcha\">\n");
            out.push_str(&format!("<h3>{}</h3>\n", text(CAPTCHA_TITLE)));
            out.push_str(&format!("<p>{}</p>\n", text(CAPTCHA_MESSAGE)));
            out.push_str("<ul>\n");
            for alt in alternatives.iter() {
                out.push_str(&format!("<li>{}</li>\n", text(alt)));
            }
            out.push_str("</ul>\n</div>\n");
        }
        ViewBody::NotFound => {
            out.push_str(&format!(
                "<div class=\"not-found\">{}</div>\n",
                text(NOT_FOUND_MESSAGE)
            ));
        }
        ViewBody::FoundWithDetails {
            grid,
            description,
            snippet,
        } => {
            out.push_str("<div class=\"details\">\n");
            for cell in grid {
                out.push_str(&format!(
                    "<div class=\"cell\"><p>{}</p><p>{}</p></div>\n",
                    text(cell.label),
                    text(&cell.value)
                ));
            }
            out.push_str("</div>\n");
            if !description.is_empty() {
                out.push_str("<div class=\"description\">\n");
                out.push_str(&describe::to_html(description));
                out.push_str("</div>\n");
            }
            if let Some(s) = snippet {
                out.push_str(&format!(
                    "<div class=\"snippet\"><span>{} characters</span><pre><code>{}</code></pre></div>\n",
                    s.char_count,
                    text(&s.formatted)
                ));
            }
        }
    }

    if let Some(note) = &view.detector_note {
        out.push_str(&format!("<p class=\"note\">{}</p>\n", text(note)));
    }
    out.push_str(&format!(
        "<p class=\"timestamp\">{}</p>\n",
        text(&view.analyzed_at)
    ));
    out.push_str("</div>\n");
    out
}
