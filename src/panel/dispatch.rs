//! Fire-and-forget request dispatch

use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::models::AppEvent;
use crate::remote::GatewayApi;

/// Spawns gateway calls and posts their completions back as `AppEvent`s.
///
/// Nothing here blocks the caller and nothing is cancellable; ordering of
/// overlapping results is resolved by the receiving view.
#[derive(Clone)]
pub struct Dispatcher {
    api: Arc<dyn GatewayApi>,
    tx: mpsc::UnboundedSender<AppEvent>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn GatewayApi>, tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self { api, tx }
    }

    pub fn spawn<F, Fut>(&self, job: F)
    where
        F: FnOnce(Arc<dyn GatewayApi>) -> Fut,
        Fut: Future<Output = AppEvent> + Send + 'static,
    {
        let request = job(Arc::clone(&self.api));
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let event = request.await;
            if let Err(e) = tx.send(event) {
                log::debug!("Event channel closed, dropping {:?}", e.0);
            }
        });
    }
}
