//! Remote operations against the gateway REST API
//!
//! `GatewayClient` is the transport; `GatewayApi` is the typed seam the views
//! depend on.

pub mod api;
pub mod client;
pub mod endpoints;

pub use api::*;
pub use client::*;
pub use endpoints::*;
