//! Modbus RTU command implementation

use anyhow::Result;

use super::ensure_success;
use crate::cli::args::RtuCommand;
use crate::codec;
use crate::config::FormDefaults;
use crate::errors::GENERIC_FAILURE;
use crate::models::{ReadRequest, RtuConnectRequest, WriteRequest};
use crate::remote::GatewayApi;

pub async fn execute_rtu_command(
    api: &dyn GatewayApi,
    action: RtuCommand,
    defaults: &FormDefaults,
) -> Result<()> {
    match action {
        RtuCommand::Connect { port, baudrate } => {
            let request = RtuConnectRequest {
                port: port.unwrap_or_else(|| defaults.rtu_port.clone()),
                baudrate: baudrate.unwrap_or(defaults.rtu_baudrate),
            };
            println!(
                "🔌 Connecting to {} at {} baud...",
                request.port, request.baudrate
            );
            let response = api.rtu_connect(&request).await?;
            ensure_success(response, "Connection failed")?;
            println!("✅ RTU connected successfully");
        }
        RtuCommand::Disconnect => {
            let response = api.rtu_disconnect().await?;
            ensure_success(response, "Disconnect failed")?;
            println!("✅ RTU disconnected");
        }
        RtuCommand::Status => {
            let status = api.rtu_status().await?;
            if status.connected {
                println!("🟢 RTU: online");
            } else {
                println!("⚪ RTU: offline");
            }
            if let Some(error) = status.error {
                println!("   {}", error);
            }
        }
        RtuCommand::Read {
            slave,
            kind,
            start,
            quantity,
        } => {
            let request = ReadRequest {
                slave_id: slave.unwrap_or(defaults.slave_id),
                kind,
                start_addr: start,
                quantity,
            };
            log::debug!("RTU read {:?}", request);
            let response = api.rtu_read(&request).await?;
            if !response.success {
                return Err(anyhow::anyhow!(
                    "Read failed: {}",
                    response.error.as_deref().unwrap_or(GENERIC_FAILURE)
                ));
            }
            println!("{}", codec::render_value(response.data.as_ref()));
        }
        RtuCommand::Write {
            slave,
            kind,
            addr,
            value,
        } => {
            let request = WriteRequest {
                slave_id: slave.unwrap_or(defaults.slave_id),
                kind,
                addr,
                value: codec::parse_write_value(&value, kind)?,
            };
            log::debug!("RTU write {:?}", request);
            let response = api.rtu_write(&request).await?;
            ensure_success(response, "Write failed")?;
            println!("✅ Data written");
        }
    }
    Ok(())
}
