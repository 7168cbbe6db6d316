//! Display-state selection and the result view built on it.

mod render;
mod view;

pub use render::{render_html, render_text};
pub use view::{DetailCell, ResultView, Snippet, ViewBody};

use crate::model::NormalizedResult;

/// The three mutually exclusive ways a result is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationState {
    CaptchaBlocked,
    NotFound,
    FoundWithDetails,
}

/// First match wins: a CAPTCHA block hides everything else, even a found form.
pub fn resolve(result: &NormalizedResult) -> PresentationState {
    if result.captcha_detected {
        PresentationState::CaptchaBlocked
    } else if !result.found {
        PresentationState::NotFound
    } else {
        PresentationState::FoundWithDetails
    }
}

/// Suggestions shown whenever a page is behind bot protection.
pub const CAPTCHA_ALTERNATIVES: &[&str] = &[
    "Use the site's official API if available",
    "Manually export HTML from your browser DevTools",
    "Test with similar sites without bot protection",
];

pub const CAPTCHA_TITLE: &str = "AI Agent Protection Detected";
pub const CAPTCHA_MESSAGE: &str = "This website uses CAPTCHA or anti-bot protection (DataDome, \
Cloudflare, reCAPTCHA, etc.) that prevents automated scraping. The login page cannot be \
accessed programmatically.";
pub const NOT_FOUND_MESSAGE: &str = "No authentication components found in this webpage";

/// A known login page offered as a quick example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleSite {
    pub name: &'static str,
    pub url: &'static str,
}

pub const EXAMPLE_SITES: &[ExampleSite] = &[
    ExampleSite { name: "GitHub", url: "https://github.com/login" },
    ExampleSite { name: "Instagram", url: "https://instagram.com/accounts/login" },
    ExampleSite { name: "Stack Overflow", url: "https://stackoverflow.com/users/login" },
    ExampleSite { name: "Medium", url: "https://medium.com/m/signin" },
    ExampleSite { name: "WordPress", url: "https://wordpress.com/log-in" },
];
