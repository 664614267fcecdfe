//! CLI for the VMSS image-type selection form.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use vmssform_core::config;

use commands::{run_check, run_form};

/// Top-level CLI for the VMSS image-type selector.
#[derive(Debug, Parser)]
#[command(name = "vmssform")]
#[command(about = "Azure VMSS image-type selection form", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run one image-type check and print the result.
    Check {
        /// Azure credentials identifier.
        #[arg(long = "credentials-id", value_name = "ID")]
        credentials_id: String,
        /// Resource group containing the scale set.
        #[arg(long = "resource-group", value_name = "RG")]
        resource_group: String,
        /// Scale set name.
        #[arg(long)]
        name: String,
        /// Check endpoint; overrides the configured default.
        #[arg(long = "check-url", value_name = "URL")]
        check_url: Option<String>,
    },

    /// Interactive form session on stdin.
    Form {
        /// Check endpoint; overrides the configured default.
        #[arg(long = "check-url", value_name = "URL")]
        check_url: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check {
                credentials_id,
                resource_group,
                name,
                check_url,
            } => {
                run_check(
                    &cfg,
                    &credentials_id,
                    &resource_group,
                    &name,
                    check_url.as_deref(),
                )
                .await?;
            }
            CliCommand::Form { check_url } => run_form(&cfg, check_url.as_deref()).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
