//! View-models of the control panel
//!
//! Each subsystem view owns its remote snapshot and form inputs, issues its
//! requests through the [`Dispatcher`] and applies the completions that come
//! back as [`AppEvent`](crate::models::AppEvent)s. The [`PanelController`]
//! ties them together behind an explicit [`UiState`].

pub mod config_view;
pub mod controller;
pub mod dispatch;
pub mod editor;
pub mod form;
pub mod network;
pub mod rtu;
pub mod state;
pub mod tcp;

#[cfg(test)]
pub(crate) mod testing;


pub use config_view::ConfigView;
pub use controller::PanelController;
pub use dispatch::Dispatcher;
pub use editor::TextArea;
pub use form::FormItem;
pub use network::NetworkView;
pub use rtu::RtuView;
pub use state::*;
pub use tcp::TcpView;
