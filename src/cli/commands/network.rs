//! Network command implementation

use anyhow::Result;

use super::ensure_success;
use crate::cli::args::NetworkCommand;
use crate::errors::PanelError;
use crate::models::{HostnameRequest, NetworkState};
use crate::remote::GatewayApi;

pub async fn execute_network_command(api: &dyn GatewayApi, action: NetworkCommand) -> Result<()> {
    match action {
        NetworkCommand::Show => {
            let state = api.network_config().await?;
            for line in format_network(&state) {
                println!("{}", line);
            }
        }
        NetworkCommand::Hostname => {
            let info = api.hostname().await?;
            println!("{}", info.hostname);
        }
        NetworkCommand::SetHostname { hostname } => {
            let hostname = hostname.trim().to_string();
            if hostname.is_empty() {
                return Err(PanelError::Validation("please enter a hostname".to_string()).into());
            }
            println!("🏷️  Setting hostname to {}...", hostname);
            let response = api.set_hostname(&HostnameRequest { hostname }).await?;
            ensure_success(response, "Failed to set hostname")?;
            println!("✅ Hostname updated successfully");
        }
    }
    Ok(())
}

pub fn format_network(state: &NetworkState) -> Vec<String> {
    if state.is_empty() {
        return vec!["No data".to_string()];
    }

    let mut lines = Vec::new();
    if !state.interfaces.is_empty() {
        lines.push("🌐 Interfaces:".to_string());
        for (name, info) in &state.interfaces {
            lines.push(format!("  {}: {} ({})", name, info.ip, info.status));
        }
    }
    if let Some(hostname) = &state.hostname {
        lines.push(format!("🏷️  Hostname: {}", hostname));
    }
    lines
}
