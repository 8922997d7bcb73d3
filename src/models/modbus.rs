//! Modbus RTU request/response models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Register table addressed by a read request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReadKind {
    #[value(name = "coils")]
    Coils,
    #[value(name = "discrete_inputs")]
    DiscreteInputs,
    #[value(name = "holding_registers")]
    HoldingRegisters,
    #[value(name = "input_registers")]
    InputRegisters,
}

impl ReadKind {
    pub const ALL: [ReadKind; 4] = [
        ReadKind::Coils,
        ReadKind::DiscreteInputs,
        ReadKind::HoldingRegisters,
        ReadKind::InputRegisters,
    ];

    /// Name used in the `type` field on the wire
    pub fn wire_name(&self) -> &'static str {
        match self {
            ReadKind::Coils => "coils",
            ReadKind::DiscreteInputs => "discrete_inputs",
            ReadKind::HoldingRegisters => "holding_registers",
            ReadKind::InputRegisters => "input_registers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadKind::Coils => "Coils",
            ReadKind::DiscreteInputs => "Discrete inputs",
            ReadKind::HoldingRegisters => "Holding registers",
            ReadKind::InputRegisters => "Input registers",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for ReadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// Register table addressed by a write request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WriteKind {
    /// Single coil
    Coil,
    /// Single holding register
    Register,
    /// Consecutive coils
    Coils,
    /// Consecutive holding registers
    Registers,
}

impl WriteKind {
    pub const ALL: [WriteKind; 4] = [
        WriteKind::Coil,
        WriteKind::Register,
        WriteKind::Coils,
        WriteKind::Registers,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            WriteKind::Coil => "coil",
            WriteKind::Register => "register",
            WriteKind::Coils => "coils",
            WriteKind::Registers => "registers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WriteKind::Coil => "Coil",
            WriteKind::Register => "Register",
            WriteKind::Coils => "Coils",
            WriteKind::Registers => "Registers",
        }
    }

    /// Single-value kinds get the numeric/boolean coercion on free text input.
    pub fn is_single(&self) -> bool {
        matches!(self, WriteKind::Coil | WriteKind::Register)
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn previous(self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for WriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: usize) -> T {
    let idx = all.iter().position(|k| *k == current).unwrap_or(0);
    all[(idx + step) % all.len()]
}

/// Element of an array write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModbusScalar {
    Bool(bool),
    Int(i64),
}

/// Payload of a write request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WriteValue {
    Scalar(i64),
    Sequence(Vec<ModbusScalar>),
    /// Free text forwarded untouched for multi-value kinds
    Text(String),
}

/// Parameters of `POST /api/modbus/rtu/connect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RtuConnectRequest {
    pub port: String,
    pub baudrate: u32,
}

/// Parameters of `POST /api/modbus/rtu/read`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadRequest {
    pub slave_id: u8,
    #[serde(rename = "type")]
    pub kind: ReadKind,
    pub start_addr: u16,
    pub quantity: u16,
}

/// Parameters of `POST /api/modbus/rtu/write`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteRequest {
    pub slave_id: u8,
    #[serde(rename = "type")]
    pub kind: WriteKind,
    pub addr: u16,
    pub value: WriteValue,
}

/// Reply of `GET /api/modbus/rtu/status`
///
/// The gateway answers `{"error": ...}` without `connected` when no RTU master
/// exists yet; that reads as disconnected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RtuStatus {
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub baudrate: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Reply of `POST /api/modbus/rtu/read`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}
