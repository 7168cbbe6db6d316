//! Best-effort HTML pretty-printer for detected snippets.
//!
//! The snippet is parsed as a body fragment and re-serialized with two-space
//! indentation, one tag or text line per output line, runs of blank lines
//! collapsed to one. Any parse error returns the input unchanged.

use scraper::{node::Node, ElementRef, Html};
use thiserror::Error;

const INDENT: &str = "  ";

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is whitespace-sensitive; emitted as one block.
const VERBATIM_ELEMENTS: &[&str] = &["script", "style", "pre", "textarea"];

/// Internal only; always recovered by falling back to the raw input.
#[derive(Debug, Error)]
enum FormattingFailure {
    #[error("snippet is not well-formed: {0}")]
    Malformed(String),
    #[error("snippet has no markup to format")]
    Empty,
}

/// Pretty-prints `html`. Absent or empty input yields an empty string; input
/// that cannot be formatted is returned as-is.
pub fn format_html(html: Option<&str>) -> String {
    let html = match html {
        Some(h) if !h.is_empty() => h,
        _ => return String::new(),
    };
    match pretty_print(html) {
        Ok(out) => out,
        Err(e) => {
            tracing::debug!("html formatting fell back to raw snippet: {}", e);
            html.to_string()
        }
    }
}

struct Printer {
    lines: Vec<String>,
    depth: usize,
    /// Newlines seen in source whitespace since the last emitted line.
    pending_newlines: usize,
}

impl Printer {
    fn emit(&mut self, content: &str) {
        if self.pending_newlines >= 2 && !self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.pending_newlines = 0;
        self.lines.push(format!("{}{}", INDENT.repeat(self.depth), content));
    }

    fn text(&mut self, text: &str) {
        let mut parts = text.split('\n').peekable();
        while let Some(part) = parts.next() {
            let trimmed = part.trim();
            if !trimmed.is_empty() {
                self.emit(&html_escape::encode_text(trimmed));
            }
            if parts.peek().is_some() {
                self.pending_newlines += 1;
            }
        }
    }

    fn element(&mut self, el: ElementRef<'_>) {
        let name = el.value().name();
        if VERBATIM_ELEMENTS.contains(&name) {
            self.emit(&el.html());
            return;
        }
        self.emit(&open_tag(el));
        if VOID_ELEMENTS.contains(&name) {
            return;
        }
        self.depth += 1;
        self.children(el);
        self.depth -= 1;
        self.emit(&format!("</{}>", name));
    }

    fn children(&mut self, parent: ElementRef<'_>) {
        for child in parent.children() {
            match child.value() {
                Node::Text(t) => self.text(t),
                Node::Comment(c) => self.emit(&format!("<!--{}-->", &**c)),
                Node::Doctype(d) => self.emit(&format!("<!DOCTYPE {}>", d.name())),
                Node::Element(_) => {
                    if let Some(el) = ElementRef::wrap(child) {
                        self.element(el);
                    }
                }
                _ => {}
            }
        }
    }
}

fn open_tag(el: ElementRef<'_>) -> String {
    let mut tag = format!("<{}", el.value().name());
    for (name, value) in el.value().attrs() {
        tag.push_str(&format!(
            " {}=\"{}\"",
            name,
            html_escape::encode_double_quoted_attribute(value)
        ));
    }
    tag.push('>');
    tag
}

fn pretty_print(html: &str) -> Result<String, FormattingFailure> {
    let fragment = Html::parse_fragment(html);
    if let Some(first) = fragment.errors.first() {
        return Err(FormattingFailure::Malformed(first.to_string()));
    }
    let mut p = Printer {
        lines: Vec::new(),
        depth: 0,
        pending_newlines: 0,
    };
    p.children(fragment.root_element());
    if p.lines.is_empty() {
        return Err(FormattingFailure::Empty);
    }
    Ok(p.lines.join("\n"))
}
