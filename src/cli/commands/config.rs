//! Gateway configuration command implementation

use anyhow::{Context, Result};
use std::io::Read;

use super::ensure_success;
use crate::cli::args::ConfigCommand;
use crate::models::ConfigDocument;
use crate::remote::GatewayApi;

pub async fn execute_config_command(api: &dyn GatewayApi, action: ConfigCommand) -> Result<()> {
    match action {
        ConfigCommand::Get => {
            let document = api.config_get().await?;
            println!("{}", document.to_pretty());
        }
        ConfigCommand::Set { source } => {
            let text = read_source(&source)?;
            // parse locally first; nothing is sent on a parse failure
            let document = ConfigDocument::parse(&text)?;
            let response = api.config_update(&document).await?;
            ensure_success(response, "Failed to save configuration")?;
            println!("✅ Configuration saved successfully");
        }
    }
    Ok(())
}

fn read_source(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read configuration from stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(source)
            .with_context(|| format!("Failed to read configuration file {}", source))
    }
}
