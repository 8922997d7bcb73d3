//! Modbus TCP command implementation

use anyhow::Result;

use super::ensure_success;
use crate::cli::args::TcpCommand;
use crate::config::FormDefaults;
use crate::models::TcpStartRequest;
use crate::panel::tcp::describe_status;
use crate::remote::GatewayApi;

pub async fn execute_tcp_command(
    api: &dyn GatewayApi,
    action: TcpCommand,
    defaults: &FormDefaults,
) -> Result<()> {
    match action {
        TcpCommand::Start { host, port } => {
            let request = TcpStartRequest {
                host: host.unwrap_or_else(|| defaults.tcp_host.clone()),
                port: port.unwrap_or(defaults.tcp_port),
            };
            println!("🚀 Starting TCP server on {}:{}...", request.host, request.port);
            let response = api.tcp_start(&request).await?;
            ensure_success(response, "Failed to start TCP server")?;
            println!("✅ TCP server started successfully");
        }
        TcpCommand::Stop => {
            let response = api.tcp_stop().await?;
            ensure_success(response, "Failed to stop TCP server")?;
            println!("✅ TCP server stopped");
        }
        TcpCommand::Status => {
            let status = api.tcp_status().await?;
            for line in describe_status(&status) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
