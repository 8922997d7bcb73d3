//! View-model building blocks shared by all panels

use chrono::{DateTime, Local};
use std::collections::VecDeque;

use crate::errors::Result;
use crate::models::{PanelId, StatusLevel, TabIndicator};

/// Last known snapshot of a remotely owned subsystem.
///
/// Every refresh replaces the whole value. A failed refresh keeps the previous
/// snapshot only as `stale`, next to the failure cause, so it is never shown
/// as current.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteState<T> {
    Unknown,
    Ready(T),
    Failed { cause: String, stale: Option<T> },
}

impl<T> Default for RemoteState<T> {
    fn default() -> Self {
        RemoteState::Unknown
    }
}

impl<T> RemoteState<T> {
    pub fn apply(&mut self, result: Result<T>) {
        match result {
            Ok(value) => *self = RemoteState::Ready(value),
            Err(err) => {
                let stale = match std::mem::take(self) {
                    RemoteState::Ready(value) => Some(value),
                    RemoteState::Failed { stale, .. } => stale,
                    RemoteState::Unknown => None,
                };
                *self = RemoteState::Failed {
                    cause: err.user_message(),
                    stale,
                };
            }
        }
    }

    /// Snapshot from the latest refresh, if it succeeded
    pub fn current(&self) -> Option<&T> {
        match self {
            RemoteState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Latest good snapshot, including one kept after a failure
    pub fn last_known(&self) -> Option<&T> {
        match self {
            RemoteState::Ready(value) => Some(value),
            RemoteState::Failed { stale, .. } => stale.as_ref(),
            RemoteState::Unknown => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteState::Failed { cause, .. } => Some(cause),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RemoteState::Failed { .. })
    }
}

/// Monotonic tag for refresh requests of one subsystem.
///
/// Only the result of the most recently issued refresh is applied; earlier
/// ones that arrive late are dropped.
#[derive(Debug, Default)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn latest(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
    pub at: DateTime<Local>,
}

/// Status notifier: latest message plus a bounded history
#[derive(Debug)]
pub struct StatusLine {
    history: VecDeque<StatusMessage>,
    capacity: usize,
}

impl StatusLine {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn success(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::info!("{}", text);
        self.push(StatusLevel::Success, text);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::warn!("{}", text);
        self.push(StatusLevel::Error, text);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::info!("{}", text);
        self.push(StatusLevel::Info, text);
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.history.back()
    }

    pub fn history(&self) -> impl DoubleEndedIterator<Item = &StatusMessage> {
        self.history.iter()
    }

    fn push(&mut self, level: StatusLevel, text: String) {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(StatusMessage {
            level,
            text,
            at: Local::now(),
        });
    }
}

/// Outcome box of an RTU read or write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub level: StatusLevel,
    pub text: String,
}

impl ResultPanel {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// Explicit UI state; the renderer is a projection of this plus the views
#[derive(Debug)]
pub struct UiState {
    pub active_panel: PanelId,
    pub active_indicator: TabIndicator,
    /// Focused form item within the active panel
    pub focus: usize,
    pub status: StatusLine,
}

impl UiState {
    pub fn new(initial_panel: PanelId, status_history: usize) -> Self {
        Self {
            active_panel: initial_panel,
            active_indicator: TabIndicator::of(initial_panel),
            focus: 0,
            status: StatusLine::new(status_history),
        }
    }

    pub fn is_active(&self, panel: PanelId) -> bool {
        self.active_panel == panel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{PanelError, TransportError};

    #[test]
    fn test_failure_keeps_previous_snapshot_as_stale() {
        let mut state = RemoteState::Unknown;
        state.apply(Ok(7));
        assert_eq!(state.current(), Some(&7));

        state.apply(Err(TransportError::new("refused").into()));
        assert_eq!(state.current(), None);
        assert_eq!(state.last_known(), Some(&7));
        assert!(state.error().unwrap().contains("refused"));

        // a second failure still remembers the last good value
        state.apply(Err(PanelError::Domain(None)));
        assert_eq!(state.last_known(), Some(&7));

        state.apply(Ok(9));
        assert_eq!(state, RemoteState::Ready(9));
    }

    #[test]
    fn test_generation_only_latest_is_current() {
        let mut generation = Generation::default();
        let first = generation.next();
        let second = generation.next();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn test_status_history_is_bounded() {
        let mut status = StatusLine::new(2);
        status.info("one");
        status.error("two");
        status.success("three");

        let texts: Vec<_> = status.history().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "three"]);
        assert_eq!(status.current().unwrap().level, StatusLevel::Success);
    }
}
