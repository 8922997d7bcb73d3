//! Interactive panel application state and key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::models::{AppEvent, PanelAction, PanelId, TabIndicator};
use crate::panel::{FormItem, PanelController};
use crate::remote::GatewayApi;

/// What the event loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

pub struct App {
    pub controller: PanelController,
    pub server_url: String,
    pub show_help: bool,
}

impl App {
    pub fn new(
        config: &AppConfig,
        api: Arc<dyn GatewayApi>,
        tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            controller: PanelController::new(config, api, tx),
            server_url: config.server_url.clone(),
            show_help: false,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        self.controller.handle_event(event);
    }

    /// Switch panels the way a tab click does
    pub fn select_tab(&mut self, index: usize) {
        if let Some(panel) = PanelId::from_tab_index(index) {
            self.controller.select(panel, TabIndicator(index));
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return KeyOutcome::Quit;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter) {
                self.show_help = false;
            }
            return KeyOutcome::Continue;
        }

        match key.code {
            KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::F(n @ 1..=4) => {
                self.select_tab(usize::from(n) - 1);
                return KeyOutcome::Continue;
            }
            KeyCode::Char(c @ '1'..='4') if key.modifiers.contains(KeyModifiers::ALT) => {
                self.select_tab(c as usize - '1' as usize);
                return KeyOutcome::Continue;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.controller.ui.is_active(PanelId::Config) {
                    self.controller.perform(PanelAction::SaveConfig);
                }
                return KeyOutcome::Continue;
            }
            KeyCode::Tab => {
                self.controller.focus_next();
                return KeyOutcome::Continue;
            }
            KeyCode::BackTab => {
                self.controller.focus_previous();
                return KeyOutcome::Continue;
            }
            _ => {}
        }

        match self.controller.focused_item() {
            Some(FormItem::Field(field)) => match key.code {
                KeyCode::Char(c) => self.controller.field_mut(field).push(c),
                KeyCode::Backspace => {
                    self.controller.field_mut(field).pop();
                }
                KeyCode::Enter | KeyCode::Down => self.controller.focus_next(),
                KeyCode::Up => self.controller.focus_previous(),
                _ => {}
            },
            Some(FormItem::Choice(choice)) => match key.code {
                KeyCode::Left => self.controller.cycle_choice(choice, false),
                KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
                    self.controller.cycle_choice(choice, true)
                }
                KeyCode::Down => self.controller.focus_next(),
                KeyCode::Up => self.controller.focus_previous(),
                KeyCode::Char('?') => self.show_help = true,
                _ => {}
            },
            Some(FormItem::Button(action)) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.controller.perform(action),
                KeyCode::Down | KeyCode::Right => self.controller.focus_next(),
                KeyCode::Up | KeyCode::Left => self.controller.focus_previous(),
                KeyCode::Char('?') => self.show_help = true,
                _ => {}
            },
            Some(FormItem::Editor) => {
                let editor = &mut self.controller.config.editor;
                match key.code {
                    KeyCode::Char(c) => editor.insert_char(c),
                    KeyCode::Enter => editor.insert_newline(),
                    KeyCode::Backspace => editor.backspace(),
                    KeyCode::Left => editor.move_left(),
                    KeyCode::Right => editor.move_right(),
                    KeyCode::Up => editor.move_up(),
                    KeyCode::Down => editor.move_down(),
                    _ => {}
                }
            }
            None => {}
        }

        KeyOutcome::Continue
    }
}
