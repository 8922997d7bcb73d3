//! Long-running background services

pub mod poller;

pub use poller::spawn_poller;
