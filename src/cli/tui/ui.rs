//! TUI rendering logic
//!
//! Everything here is a projection of `App`; nothing is mutated while drawing.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

use crate::cli::tui::main_app::App;
use crate::models::{Badge, PanelId};
use crate::panel::tcp::describe_status;
use crate::panel::{FormItem, PanelController, RemoteState, ResultPanel, form};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_tabs(f, &app.controller, chunks[1]);

    match app.controller.ui.active_panel {
        PanelId::Network => render_network(f, &app.controller, chunks[2]),
        PanelId::Rtu => render_rtu(f, &app.controller, chunks[2]),
        PanelId::Tcp => render_tcp(f, &app.controller, chunks[2]),
        PanelId::Config => render_config(f, &app.controller, chunks[2]),
    }

    render_status_line(f, &app.controller, chunks[3]);

    if app.show_help {
        render_help(f);
    }
}

fn badge_span(name: &str, badge: Badge) -> Span<'static> {
    Span::styled(
        format!("{} {}: {} ", badge.symbol(), name, badge.label()),
        Style::default()
            .fg(badge.color())
            .add_modifier(Modifier::BOLD),
    )
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "🔌 Modbus Gateway ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("({})  ", app.server_url),
            Style::default().fg(Color::Gray),
        ),
        badge_span("RTU", app.controller.rtu_badge()),
        badge_span("TCP", app.controller.tcp_badge()),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_tabs(f: &mut Frame, controller: &PanelController, area: Rect) {
    let titles: Vec<Line> = PanelId::ALL
        .iter()
        .map(|panel| Line::from(format!("F{} {}", panel.tab_index() + 1, panel.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(controller.ui.active_indicator.0)
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    f.render_widget(tabs, area);
}

/// Form lines of the active panel, with the focused item highlighted
fn form_lines(controller: &PanelController) -> Vec<Line<'static>> {
    let focused = controller.focused_item();
    form::items(controller.ui.active_panel)
        .iter()
        .filter(|item| **item != FormItem::Editor)
        .map(|item| {
            let is_focused = focused == Some(*item);
            let marker = if is_focused { "▶ " } else { "  " };
            let style = if is_focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let text = match item {
                FormItem::Field(field) => {
                    let cursor = if is_focused { "_" } else { "" };
                    format!("{:<14} {}{}", field.label(), controller.field(*field), cursor)
                }
                FormItem::Choice(choice) => {
                    format!("{:<14} ◀ {} ▶", "Type", controller.choice_label(*choice))
                }
                FormItem::Button(action) => format!("[ {} ]", action.label()),
                FormItem::Editor => String::new(),
            };
            Line::from(vec![Span::raw(marker), Span::styled(text, style)])
        })
        .collect()
}

/// Info lines for a remote snapshot; failures never render as plain data.
fn snapshot_lines<T>(
    state: &RemoteState<T>,
    describe: impl Fn(&T) -> Vec<String>,
) -> Vec<Line<'static>> {
    match state {
        RemoteState::Unknown => vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::Gray),
        ))],
        RemoteState::Ready(value) => describe(value).into_iter().map(Line::from).collect(),
        RemoteState::Failed { cause, stale } => {
            let mut lines = vec![Line::from(Span::styled(
                format!("❌ Failed to load data: {}", cause),
                Style::default().fg(Color::Red),
            ))];
            if let Some(value) = stale {
                lines.extend(describe(value).into_iter().map(|text| {
                    Line::from(Span::styled(
                        format!("(stale) {}", text),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::DIM),
                    ))
                }));
            }
            lines
        }
    }
}

/// Height of a bordered block holding `lines` rows, clamped to `u16`.
pub(crate) fn block_height(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

fn split_info_and_form(area: Rect, info_lines: usize) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(block_height(info_lines)), Constraint::Min(0)])
        .split(area)
}

fn render_network(f: &mut Frame, controller: &PanelController, area: Rect) {
    let info = snapshot_lines(&controller.network.state, |state| {
        if state.is_empty() {
            return vec!["No data".to_string()];
        }
        let mut lines: Vec<String> = state
            .interfaces
            .iter()
            .map(|(name, info)| format!("{}: {} ({})", name, info.ip, info.status))
            .collect();
        if let Some(hostname) = &state.hostname {
            lines.push(format!("Hostname: {}", hostname));
        }
        lines
    });

    let chunks = split_info_and_form(area, info.len());
    let info = Paragraph::new(info)
        .block(Block::default().title("🌐 Interfaces").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(info, chunks[0]);

    let form = Paragraph::new(form_lines(controller))
        .block(Block::default().title("🏷️  Hostname").borders(Borders::ALL));
    f.render_widget(form, chunks[1]);
}

fn result_line(result: Option<&ResultPanel>) -> Line<'static> {
    match result {
        Some(result) => Line::from(Span::styled(
            result.text.clone(),
            Style::default().fg(result.level.color()),
        )),
        None => Line::from(Span::styled("-", Style::default().fg(Color::Gray))),
    }
}

fn render_rtu(f: &mut Frame, controller: &PanelController, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let form = Paragraph::new(form_lines(controller))
        .block(Block::default().title("📡 Modbus RTU").borders(Borders::ALL));
    f.render_widget(form, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(chunks[1]);

    let link = snapshot_lines(&controller.rtu.link, |status| {
        let mut lines = vec![format!(
            "Link: {}",
            if status.connected { "online" } else { "offline" }
        )];
        if let Some(error) = &status.error {
            lines.push(error.clone());
        }
        lines
    });
    f.render_widget(
        Paragraph::new(link)
            .block(Block::default().title("Link").borders(Borders::ALL))
            .wrap(Wrap { trim: false }),
        right[0],
    );

    f.render_widget(
        Paragraph::new(result_line(controller.rtu.read_result.as_ref()))
            .block(Block::default().title("Read result").borders(Borders::ALL))
            .wrap(Wrap { trim: false }),
        right[1],
    );
    f.render_widget(
        Paragraph::new(result_line(controller.rtu.write_result.as_ref()))
            .block(Block::default().title("Write result").borders(Borders::ALL))
            .wrap(Wrap { trim: false }),
        right[2],
    );
}

fn render_tcp(f: &mut Frame, controller: &PanelController, area: Rect) {
    let info = snapshot_lines(&controller.tcp.status, describe_status);

    let chunks = split_info_and_form(area, info.len());
    f.render_widget(
        Paragraph::new(info)
            .block(Block::default().title("🖧 Server status").borders(Borders::ALL))
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    let form = Paragraph::new(form_lines(controller))
        .block(Block::default().title("Modbus TCP").borders(Borders::ALL));
    f.render_widget(form, chunks[1]);
}

fn render_config(f: &mut Frame, controller: &PanelController, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let editing = controller.focused_item() == Some(FormItem::Editor);
    let editor = &controller.config.editor;
    let (cursor_row, cursor_col) = editor.cursor();

    let lines: Vec<Line> = editor
        .lines()
        .iter()
        .enumerate()
        .map(|(row, text)| {
            if editing && row == cursor_row {
                let before: String = text.chars().take(cursor_col).collect();
                let at: String = text.chars().skip(cursor_col).take(1).collect();
                let after: String = text.chars().skip(cursor_col + 1).collect();
                Line::from(vec![
                    Span::raw(before),
                    Span::styled(
                        if at.is_empty() { " ".to_string() } else { at },
                        Style::default().add_modifier(Modifier::REVERSED),
                    ),
                    Span::raw(after),
                ])
            } else {
                Line::from(text.clone())
            }
        })
        .collect();

    // keep the cursor row visible
    let visible = chunks[0].height.saturating_sub(2) as usize;
    let scroll =
        u16::try_from(cursor_row.saturating_sub(visible.saturating_sub(1))).unwrap_or(u16::MAX);

    let border = if editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(lines).scroll((scroll, 0)).block(
            Block::default()
                .title("⚙️  Configuration (Ctrl+S to save)")
                .borders(Borders::ALL)
                .border_style(border),
        ),
        chunks[0],
    );

    let buttons: Vec<Span> = form_lines(controller)
        .into_iter()
        .flat_map(|line| line.spans)
        .collect();
    f.render_widget(
        Paragraph::new(Line::from(buttons)).block(Block::default().borders(Borders::ALL)),
        chunks[1],
    );
}

fn render_status_line(f: &mut Frame, controller: &PanelController, area: Rect) {
    let line = match controller.ui.status.current() {
        Some(message) => Line::from(vec![
            Span::styled(
                format!("{} ", message.at.format("%H:%M:%S")),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("{} {}", message.level.symbol(), message.text),
                Style::default().fg(message.level.color()),
            ),
        ]),
        None => Line::from(Span::styled(
            "[F1-F4]Panels [Tab]Next field [Enter]Activate [?]Help [Esc]Quit",
            Style::default().fg(Color::Gray),
        )),
    };

    f.render_widget(
        Paragraph::new(line).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let text = vec![
        Line::from("F1-F4 / Alt+1-4   switch panel"),
        Line::from("Tab / Shift+Tab   move between fields"),
        Line::from("Enter / Space     press the focused button"),
        Line::from("Left / Right      change register type"),
        Line::from("Ctrl+S            save configuration"),
        Line::from("Esc / Ctrl+C      quit"),
    ];

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .title("❓ Help")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        ),
        area,
    );
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
