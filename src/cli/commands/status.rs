//! Status command implementation

use anyhow::Result;

use crate::models::SystemStatus;
use crate::panel::tcp::describe_status;
use crate::remote::GatewayApi;

pub async fn execute_status_command(api: &dyn GatewayApi) -> Result<()> {
    println!("🔍 Fetching gateway status...");
    let status = api.system_status().await?;
    for line in format_system_status(&status) {
        println!("{}", line);
    }
    Ok(())
}

pub fn format_system_status(status: &SystemStatus) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!(
        "🏷️  Hostname: {}",
        status.hostname.as_deref().unwrap_or("-")
    ));

    match &status.rtu {
        Some(rtu) if rtu.connected => lines.push(format!(
            "🟢 RTU: connected ({} @ {} baud)",
            rtu.port.as_deref().unwrap_or("?"),
            rtu.baudrate
                .map(|b| b.to_string())
                .unwrap_or_else(|| "?".to_string())
        )),
        Some(_) => lines.push("⚪ RTU: disconnected".to_string()),
        None => lines.push("⏳ RTU: unknown".to_string()),
    }

    match &status.tcp {
        Some(tcp) => {
            let symbol = if tcp.running { "🟢" } else { "⚪" };
            lines.push(format!("{} TCP server", symbol));
            lines.extend(describe_status(tcp).into_iter().map(|l| format!("   {}", l)));
        }
        None => lines.push("⏳ TCP server: unknown".to_string()),
    }

    lines
}
