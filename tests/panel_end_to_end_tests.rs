//! End-to-end tests: panel controller and CLI commands over real HTTP


use gateway_panel::cli::args::{Commands, ConfigCommand, RtuCommand, TcpCommand};
use gateway_panel::cli::commands;
use gateway_panel::config::AppConfig;
use gateway_panel::models::*;
use gateway_panel::panel::PanelController;
use gateway_panel::remote::GatewayClient;
use mock_gateway::MockGateway;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

struct Session {
    mock: MockGateway,
    controller: PanelController,
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl Session {
    async fn start() -> Self {
        let mock = MockGateway::start().await;
        let config = AppConfig::default()
            .with_server_url(Some(mock.url.clone()))
            .unwrap();
        let client = GatewayClient::new(&config.server_url, config.request_timeout()).unwrap();
        let (tx, rx) = mpsc::unbounded_channel();
        let controller = PanelController::new(&config, Arc::new(client), tx);
        Self {
            mock,
            controller,
            rx,
        }
    }

    async fn settle(&mut self, count: usize) {
        for _ in 0..count {
            let event = tokio::time::timeout(Duration::from_secs(5), self.rx.recv())
                .await
                .expect("timed out waiting for the gateway")
                .expect("event channel closed");
            self.controller.handle_event(event);
        }
    }

    fn last_status(&self) -> String {
        self.controller
            .ui
            .status
            .current()
            .map(|m| m.text.clone())
            .unwrap_or_default()
    }
}

#[tokio::test]
async fn test_rtu_connect_shows_online_badge() {
    let mut session = Session::start().await;
    assert_eq!(session.controller.rtu_badge(), Badge::Unknown);

    session.controller.perform(PanelAction::RtuConnect);
    session.settle(2).await;

    {
        let state = session.mock.state.lock().unwrap();
        assert_eq!(state.rtu_port.as_deref(), Some("/dev/ttyUSB0"));
        assert_eq!(state.rtu_baudrate, Some(9600));
    }
    assert_eq!(session.mock.count("GET /api/modbus/rtu/status"), 1);
    assert_eq!(session.controller.rtu_badge(), Badge::Online);
}

#[tokio::test]
async fn test_invalid_config_text_never_posts() {
    let mut session = Session::start().await;
    session.controller.select(PanelId::Config, TabIndicator(3));
    session.settle(1).await;
    assert_eq!(session.mock.count("GET /api/config/get"), 1);

    session.controller.config.editor.set_text("{not json");
    session.controller.perform(PanelAction::SaveConfig);
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert_eq!(session.mock.count("POST /api/config/update"), 0);
    assert!(session.last_status().contains("not valid JSON"));
}

#[tokio::test]
async fn test_edited_config_is_saved() {
    let mut session = Session::start().await;
    session.controller.perform(PanelAction::LoadConfig);
    session.settle(1).await;

    let text = session
        .controller
        .config
        .editor
        .text()
        .replace("\"slaves\": []", "\"slaves\": [1]");
    session.controller.config.editor.set_text(&text);
    session.controller.perform(PanelAction::SaveConfig);
    session.settle(1).await;

    assert_eq!(session.last_status(), "Configuration saved successfully");
    assert_eq!(
        session.mock.state.lock().unwrap().config["slaves"],
        serde_json::json!([1])
    );
}

#[tokio::test]
async fn test_stop_twice_reports_generic_failure() {
    let mut session = Session::start().await;
    session.controller.perform(PanelAction::TcpStop);
    session.settle(1).await;

    assert_eq!(
        session.last_status(),
        "Failed to stop TCP server: Operation failed"
    );
    // a failed command triggers no follow-up refresh
    assert_eq!(session.mock.count("GET /api/modbus/tcp/status"), 0);

    session.controller.perform(PanelAction::TcpStart);
    session.settle(2).await;
    assert_eq!(session.controller.tcp_badge(), Badge::Running);
}

#[tokio::test]
async fn test_unreachable_gateway_marks_badges_as_error() {
    let mut session = Session::start().await;
    session.controller.on_poll_tick();
    session.settle(2).await;
    assert_eq!(session.controller.tcp_badge(), Badge::Stopped);

    session
        .mock
        .state
        .lock()
        .unwrap()
        .broken
        .extend(["/api/modbus/rtu/status".to_string(), "/api/modbus/tcp/status".to_string()]);
    session.controller.on_poll_tick();
    session.settle(2).await;

    assert_eq!(session.controller.rtu_badge(), Badge::Error);
    assert_eq!(session.controller.tcp_badge(), Badge::Error);
    assert!(session.controller.tcp.status.last_known().is_some());
    assert_eq!(session.mock.count("GET /api/network/config"), 0);
}

#[tokio::test]
async fn test_initialize_fetches_each_subsystem_once() {
    let mut session = Session::start().await;
    session.controller.initialize();
    session.settle(3).await;

    assert_eq!(session.mock.count("GET /api/modbus/rtu/status"), 1);
    assert_eq!(session.mock.count("GET /api/modbus/tcp/status"), 1);
    assert_eq!(session.mock.count("GET /api/network/config"), 1);
    assert_eq!(session.controller.network.hostname_input, "modbus-gw");
}

#[tokio::test]
async fn test_cli_config_set_rejects_invalid_file() {
    let mock = MockGateway::start().await;
    let config = AppConfig::default()
        .with_server_url(Some(mock.url.clone()))
        .unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{not json").unwrap();

    let command = Commands::Config {
        action: ConfigCommand::Set {
            source: file.path().display().to_string(),
        },
    };
    let err = commands::execute_command(command, &config).await.unwrap_err();
    assert!(err.to_string().contains("not valid JSON"));
    assert_eq!(mock.total_calls(), 0);
}

#[tokio::test]
async fn test_cli_commands_round_trip() {
    let mock = MockGateway::start().await;
    let config = AppConfig::default()
        .with_server_url(Some(mock.url.clone()))
        .unwrap();

    commands::execute_command(
        Commands::Rtu {
            action: RtuCommand::Connect {
                port: None,
                baudrate: Some(19200),
            },
        },
        &config,
    )
    .await
    .unwrap();
    assert_eq!(mock.state.lock().unwrap().rtu_baudrate, Some(19200));

    let err = commands::execute_command(
        Commands::Rtu {
            action: RtuCommand::Write {
                slave: None,
                kind: WriteKind::Registers,
                addr: 0,
                value: "[1,2".to_string(),
            },
        },
        &config,
    )
    .await
    .unwrap_err();
    assert!(err.to_string().contains("malformed JSON array"));
    assert_eq!(mock.count("POST /api/modbus/rtu/write"), 0);

    let err = commands::execute_command(
        Commands::Tcp {
            action: TcpCommand::Stop,
        },
        &config,
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Failed to stop TCP server: Operation failed");
}
