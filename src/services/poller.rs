//! Background status poller

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use crate::models::AppEvent;

/// Send `AppEvent::PollTick` every `period`, starting one period from now.
///
/// The task has no stop handle; it ends when the receiving side of the event
/// channel is dropped.
pub fn spawn_poller(tx: mpsc::UnboundedSender<AppEvent>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        log::debug!("Status poller started with period {:?}", period);
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::PollTick).is_err() {
                log::debug!("Event channel closed, stopping status poller");
                break;
            }
        }
    })
}
