//! Substring heuristics for auth form fields.
//!
//! Plain case-insensitive scans of the component `type` and `html`; no HTML
//! parsing. Incidental matches (e.g. "button" in a class name) count.

use crate::model::{Details, RawComponent};

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn html_contains(c: &RawComponent, needle: &str) -> bool {
    contains_ci(&c.html, needle)
}

/// Each flag is true if any component matches; an empty slice yields all false.
pub fn detect_details(components: &[RawComponent]) -> Details {
    Details {
        has_password_field: components
            .iter()
            .any(|c| contains_ci(&c.kind, "password") || html_contains(c, "password")),
        has_email_field: components.iter().any(|c| html_contains(c, "email")),
        has_username_field: components.iter().any(|c| html_contains(c, "username")),
        has_submit_button: components
            .iter()
            .any(|c| html_contains(c, "submit") || html_contains(c, "button")),
    }
}
