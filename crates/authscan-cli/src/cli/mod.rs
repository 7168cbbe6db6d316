//! CLI for authscan.

mod commands;

use anyhow::Result;
use authscan_core::config;
use clap::{Parser, Subcommand, ValueEnum};

use commands::{run_analyze, run_completions, run_config, run_examples};

/// Top-level CLI for authscan.
#[derive(Debug, Parser)]
#[command(name = "authscan")]
#[command(about = "authscan: find login forms on web pages via the detector service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// How `analyze` prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Analyze a page for authentication components.
    Analyze {
        /// Page URL; `https://` is assumed when no scheme is given.
        url: String,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Ask the detector for its agent-assisted mode.
        #[arg(long)]
        use_agents: bool,

        /// Detector base URL (overrides config and AUTHSCAN_API_URL).
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,
    },

    /// List example login pages to try.
    Examples,

    /// Show the config file location and effective values.
    Config,

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Analyze {
                url,
                format,
                use_agents,
                api_url,
            } => {
                let mut cfg = config::load_or_init()?;
                cfg.apply_api_url_override(api_url.as_deref());
                cfg.use_agents |= use_agents;
                tracing::debug!("loaded config: {:?}", cfg);
                run_analyze(&cfg, &url, format).await?
            }
            CliCommand::Examples => run_examples(),
            CliCommand::Config => run_config()?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
