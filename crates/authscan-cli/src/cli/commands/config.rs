//! `authscan config` – show where the config lives and what is in effect.

use anyhow::Result;
use authscan_core::config::{self, API_URL_ENV};

pub fn run_config() -> Result<()> {
    let path = config::config_path()?;
    let cfg = config::load_or_init()?;
    println!("Config file: {}", path.display());
    println!("api_base_url = {}", cfg.api_base_url);
    println!("timeout_secs = {}", cfg.timeout_secs);
    println!("connect_timeout_secs = {}", cfg.connect_timeout_secs);
    println!("use_agents = {}", cfg.use_agents);
    if std::env::var(API_URL_ENV).is_ok_and(|v| !v.trim().is_empty()) {
        println!("(api_base_url overridden by {API_URL_ENV})");
    }
    Ok(())
}
