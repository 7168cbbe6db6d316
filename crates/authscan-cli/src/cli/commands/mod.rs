//! CLI command handlers, one per file.

mod analyze;
mod completions;
mod config;
mod examples;

pub use analyze::run_analyze;
pub use completions::run_completions;
pub use config::run_config;
pub use examples::run_examples;
