//! Unit tests for TUI functionality

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use super::main_app::{App, KeyOutcome};
use super::ui::{block_height, ui};
use crate::config::AppConfig;
use crate::models::*;
use crate::panel::testing::RecordingGateway;
use crate::remote::Endpoint;

fn new_app() -> (App, Arc<RecordingGateway>, mpsc::UnboundedReceiver<AppEvent>) {
    let gateway = Arc::new(RecordingGateway::new());
    let (tx, rx) = mpsc::unbounded_channel();
    let app = App::new(&AppConfig::default(), gateway.clone(), tx);
    (app, gateway, rx)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

async fn pump(app: &mut App, rx: &mut mpsc::UnboundedReceiver<AppEvent>, count: usize) {
    for _ in 0..count {
        let event = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        app.handle_event(event);
    }
}

#[tokio::test]
async fn test_function_keys_switch_panels() {
    let (mut app, gateway, mut rx) = new_app();

    app.handle_key(key(KeyCode::F(4)));
    assert_eq!(app.controller.ui.active_panel, PanelId::Config);
    assert_eq!(app.controller.ui.active_indicator, TabIndicator(3));
    pump(&mut app, &mut rx, 1).await;
    assert_eq!(gateway.calls(Endpoint::ConfigGet), 1);

    app.handle_key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::ALT));
    assert_eq!(app.controller.ui.active_panel, PanelId::Rtu);
    assert_eq!(app.controller.ui.active_indicator, TabIndicator(1));
}

#[tokio::test]
async fn test_typing_edits_focused_field() {
    let (mut app, _gateway, _rx) = new_app();
    app.select_tab(1);

    // focus starts on the serial port field
    for _ in 0.."/dev/ttyUSB0".len() {
        app.handle_key(key(KeyCode::Backspace));
    }
    for c in "COM3".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    assert_eq!(app.controller.rtu.port_input, "COM3");

    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Char('0')));
    assert_eq!(app.controller.rtu.baudrate_input, "96000");
}

#[tokio::test]
async fn test_enter_on_button_performs_action() {
    let (mut app, gateway, mut rx) = new_app();
    app.select_tab(1);
    app.handle_key(key(KeyCode::Tab));
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(
        app.controller.focused_item(),
        Some(crate::panel::FormItem::Button(PanelAction::RtuConnect))
    );

    app.handle_key(key(KeyCode::Enter));
    pump(&mut app, &mut rx, 2).await;
    assert_eq!(gateway.calls(Endpoint::RtuConnect), 1);
    assert_eq!(app.controller.rtu_badge(), Badge::Online);
}

#[tokio::test]
async fn test_quit_keys() {
    let (mut app, _gateway, _rx) = new_app();
    assert_eq!(
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        KeyOutcome::Quit
    );
    assert_eq!(app.handle_key(key(KeyCode::Esc)), KeyOutcome::Quit);

    app.show_help = true;
    assert_eq!(app.handle_key(key(KeyCode::Esc)), KeyOutcome::Continue);
    assert!(!app.show_help);
}

#[tokio::test]
async fn test_config_editor_accepts_multiline_input() {
    let (mut app, gateway, _rx) = new_app();
    app.select_tab(3);
    app.controller.config.editor.set_text("");

    for c in "{not json".chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.controller.config.editor.text(), "{not json\n");

    app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(gateway.calls(Endpoint::ConfigUpdate), 0);
    assert_eq!(
        app.controller.ui.status.current().unwrap().level,
        StatusLevel::Error
    );
}

#[tokio::test]
async fn test_render_shows_tabs_and_badges() {
    let (mut app, _gateway, mut rx) = new_app();
    let screen = render(&app);
    assert!(screen.contains("F1 Network"));
    assert!(screen.contains("F4 Configuration"));
    assert!(screen.contains("RTU: unknown"));

    app.controller.initialize();
    pump(&mut app, &mut rx, 3).await;
    let screen = render(&app);
    assert!(screen.contains("RTU: offline"));
    assert!(screen.contains("TCP: stopped"));
    assert!(screen.contains("eth0: 192.168.1.10 (up)"));
}

#[tokio::test]
async fn test_render_failure_never_looks_current() {
    let (mut app, gateway, mut rx) = new_app();
    app.select_tab(2);
    pump(&mut app, &mut rx, 1).await;
    assert!(render(&app).contains("Status: Stopped"));

    gateway.set_unreachable(Endpoint::TcpStatus, true);
    app.controller.perform(PanelAction::RefreshTcp);
    pump(&mut app, &mut rx, 1).await;

    let screen = render(&app);
    assert!(screen.contains("Failed to load data"));
    assert!(screen.contains("(stale) Status: Stopped"));
    assert!(screen.contains("TCP: unreachable"));
}

#[tokio::test]
async fn test_render_tcp_status_error_with_running_badge() {
    let (mut app, _gateway, mut rx) = new_app();
    app.select_tab(2);
    pump(&mut app, &mut rx, 1).await;

    let generation = app.controller.tcp.latest_generation();
    let status = TcpStatus {
        running: true,
        host: Some("0.0.0.0".to_string()),
        port: Some(5020),
        error: Some("server object missing".to_string()),
    };
    app.handle_event(AppEvent::TcpStatusRefreshed(generation, Ok(status)));

    let screen = render(&app);
    assert!(screen.contains("Status unavailable: server object missing"));
    assert!(!screen.contains("Status: Running"));
    assert!(screen.contains("TCP: running"));
}

#[tokio::test]
async fn test_render_rtu_results() {
    let (mut app, _gateway, mut rx) = new_app();
    app.select_tab(1);
    *app.controller.field_mut(FieldId::ReadQuantity) = "2".to_string();
    app.controller.perform(PanelAction::RtuRead);
    pump(&mut app, &mut rx, 1).await;

    let screen = render(&app);
    assert!(screen.contains("Data: [0,1]"));
    assert!(screen.contains("Holding registers"));
}

#[test]
fn test_block_height_clamps_instead_of_wrapping() {
    assert_eq!(block_height(0), 2);
    assert_eq!(block_height(3), 5);
    assert_eq!(block_height(usize::from(u16::MAX)), u16::MAX);
    assert_eq!(block_height(70_000), u16::MAX);
}
