//! Renders detector commentary: `**bold**`, `- ` bullets, blank-line spacers.
//!
//! Output is a node tree, not markup. Text stays raw inside the nodes and is
//! escaped by whichever target renders them (see [`to_html`]).

use regex::Regex;
use std::sync::OnceLock;

/// A run of text inside a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Plain(String),
    Emphasis(String),
}

/// One rendered line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    Text(Vec<Inline>),
    ListItem(Vec<Inline>),
    /// Fixed vertical gap.
    Spacer,
}

fn emphasis_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("static regex"))
}

/// Splits `line` into plain and emphasized runs, leftmost-first, non-greedy.
pub fn parse_inline(line: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut last = 0;
    for caps in emphasis_re().captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            out.push(Inline::Plain(line[last..whole.start()].to_string()));
        }
        out.push(Inline::Emphasis(inner.as_str().to_string()));
        last = whole.end();
    }
    if last < line.len() {
        out.push(Inline::Plain(line[last..].to_string()));
    }
    out
}

fn render_line(line: &str) -> RenderNode {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix("- ") {
        RenderNode::ListItem(parse_inline(rest))
    } else if trimmed.is_empty() {
        RenderNode::Spacer
    } else {
        RenderNode::Text(parse_inline(line))
    }
}

/// One node per line, in order. Absent or empty text yields no nodes.
pub fn render(text: Option<&str>) -> Vec<RenderNode> {
    match text {
        Some(t) if !t.is_empty() => t
            .split('\n')
            .map(|l| render_line(l.strip_suffix('\r').unwrap_or(l)))
            .collect(),
        _ => Vec::new(),
    }
}

fn inline_html(runs: &[Inline], out: &mut String) {
    for run in runs {
        match run {
            Inline::Plain(s) => out.push_str(&html_escape::encode_text(s)),
            Inline::Emphasis(s) => {
                out.push_str("<strong>");
                out.push_str(&html_escape::encode_text(s));
                out.push_str("</strong>");
            }
        }
    }
}

/// Markup for a node sequence. Every text run is escaped; the only tags are
/// the ones built here. Consecutive list items share one `<ul>`.
pub fn to_html(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    let mut in_list = false;
    for node in nodes {
        let is_item = matches!(node, RenderNode::ListItem(_));
        if in_list && !is_item {
            out.push_str("</ul>\n");
            in_list = false;
        }
        match node {
            RenderNode::ListItem(runs) => {
                if !in_list {
                    out.push_str("<ul>\n");
                    in_list = true;
                }
                out.push_str("<li>");
                inline_html(runs, &mut out);
                out.push_str("</li>\n");
            }
            RenderNode::Spacer => out.push_str("<div class=\"spacer\"></div>\n"),
            RenderNode::Text(runs) => {
                out.push_str("<div>");
                inline_html(runs, &mut out);
                out.push_str("</div>\n");
            }
        }
    }
    if in_list {
        out.push_str("</ul>\n");
    }
    out
}

/// Concatenated text of the runs, markers removed.
pub fn plain_text(runs: &[Inline]) -> String {
    runs.iter()
        .map(|r| match r {
            Inline::Plain(s) | Inline::Emphasis(s) => s.as_str(),
        })
        .collect()
}
