//! Gateway client tests against the in-process mock gateway


use gateway_panel::codec;
use gateway_panel::errors::PanelError;
use gateway_panel::models::*;
use gateway_panel::remote::{GatewayApi, GatewayClient};
use mock_gateway::MockGateway;
use serde_json::json;
use std::time::Duration;

fn client_for(mock: &MockGateway) -> GatewayClient {
    GatewayClient::new(&mock.url, Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_system_status_and_network_identity() {
    let mock = MockGateway::start().await;
    let client = client_for(&mock);

    let status = client.system_status().await.unwrap();
    assert_eq!(status.hostname.as_deref(), Some("modbus-gw"));
    assert!(!status.rtu.unwrap().connected);
    assert_eq!(status.tcp.unwrap().port, Some(5020));

    let network = client.network_config().await.unwrap();
    assert_eq!(network.interfaces["eth0"].ip, "192.168.1.50");
    assert_eq!(client.hostname().await.unwrap().hostname, "modbus-gw");
}

#[tokio::test]
async fn test_connect_then_status_reports_connected() {
    let mock = MockGateway::start().await;
    let client = client_for(&mock);

    let response = client
        .rtu_connect(&RtuConnectRequest {
            port: "/dev/ttyUSB0".to_string(),
            baudrate: 9600,
        })
        .await
        .unwrap();
    assert!(response.success);
    assert_eq!(
        mock.state.lock().unwrap().last_body("/api/modbus/rtu/connect"),
        Some(&json!({"port": "/dev/ttyUSB0", "baudrate": 9600}))
    );

    let status = client.rtu_status().await.unwrap();
    assert!(status.connected);
    assert_eq!(status.baudrate, Some(9600));
}

#[tokio::test]
async fn test_write_then_read_registers() {
    let mock = MockGateway::start().await;
    let client = client_for(&mock);
    mock.state.lock().unwrap().rtu_connected = true;

    let write = codec::build_write_request("1", WriteKind::Registers, "10", "[7, 8, 9]").unwrap();
    assert!(client.rtu_write(&write).await.unwrap().success);
    assert_eq!(
        mock.state.lock().unwrap().last_body("/api/modbus/rtu/write"),
        Some(&json!({"slave_id": 1, "type": "registers", "addr": 10, "value": [7, 8, 9]}))
    );

    let read = codec::build_read_request("1", ReadKind::HoldingRegisters, "9", "4").unwrap();
    let response = client.rtu_read(&read).await.unwrap();
    assert!(response.success);
    assert_eq!(codec::render_value(response.data.as_ref()), "[0,7,8,9]");
}

#[tokio::test]
async fn test_coerced_single_write_goes_out_as_integer() {
    let mock = MockGateway::start().await;
    let client = client_for(&mock);
    mock.state.lock().unwrap().rtu_connected = true;

    let write = codec::build_write_request("2", WriteKind::Coil, "0", "TRUE").unwrap();
    client.rtu_write(&write).await.unwrap();
    assert_eq!(
        mock.state.lock().unwrap().last_body("/api/modbus/rtu/write"),
        Some(&json!({"slave_id": 2, "type": "coil", "addr": 0, "value": 1}))
    );
}

#[tokio::test]
async fn test_read_without_link_is_domain_failure() {
    let mock = MockGateway::start().await;
    let client = client_for(&mock);

    let read = codec::build_read_request("1", ReadKind::Coils, "0", "1").unwrap();
    let response = client.rtu_read(&read).await.unwrap();
    assert!(!response.success);
    assert_eq!(response.error.as_deref(), Some("RTU not connected"));
}

#[tokio::test]
async fn test_stop_when_stopped_has_no_cause() {
    let mock = MockGateway::start().await;
    let client = client_for(&mock);

    let response = client.tcp_stop().await.unwrap();
    assert!(!response.success);
    match response.into_result() {
        Err(PanelError::Domain(None)) => {}
        other => panic!("Expected domain failure without cause, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_reply_is_transport_error() {
    let mock = MockGateway::start().await;
    let client = client_for(&mock);
    mock.state
        .lock()
        .unwrap()
        .broken
        .insert("/api/modbus/tcp/status".to_string());

    let err = client.tcp_status().await.unwrap_err();
    assert!(err.is_transport(), "got {:?}", err);
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_wrong_shape_is_schema_error() {
    let mock = MockGateway::start().await;
    let client = client_for(&mock);
    mock.state
        .lock()
        .unwrap()
        .overrides
        .insert("/api/modbus/tcp/status".to_string(), json!({"running": "yes"}));

    match client.tcp_status().await {
        Err(PanelError::Schema { endpoint, .. }) => {
            assert_eq!(endpoint, "GET /api/modbus/tcp/status")
        }
        other => panic!("Expected schema error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_config_round_trip_keeps_document_verbatim() {
    let mock = MockGateway::start().await;
    let client = client_for(&mock);

    let document = client.config_get().await.unwrap();
    let text = document.to_pretty();
    assert!(text.find("\"rtu\"").unwrap() < text.find("\"slaves\"").unwrap());

    let edited = ConfigDocument::parse(&text.replace("5020", "1502")).unwrap();
    assert!(client.config_update(&edited).await.unwrap().success);
    assert_eq!(mock.state.lock().unwrap().config["tcp"]["port"], 1502);
    assert_eq!(mock.count("POST /api/config/update"), 1);
}

#[tokio::test]
async fn test_base_url_with_trailing_slash() {
    let mock = MockGateway::start().await;
    let client = GatewayClient::new(&format!("{}/", mock.url), Duration::from_secs(5)).unwrap();
    client.tcp_status().await.unwrap();
    assert_eq!(mock.count("GET /api/modbus/tcp/status"), 1);
}
