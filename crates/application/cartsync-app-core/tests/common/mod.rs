#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use cartsync_core::{CartItem, CartPayload, Notification, UiState};
use cartsync_infra::{CartGateway, GatewayError};
use reqwest::StatusCode;
use tokio::sync::{mpsc, oneshot};

/// In-memory gateway. Writes are recorded when they start; each write waits on
/// the next queued gate if any, otherwise it answers with `write_status`.
pub struct ScriptedGateway {
    fetch: Mutex<Option<Result<CartPayload, StatusCode>>>,
    write_status: Mutex<StatusCode>,
    gates: Mutex<VecDeque<oneshot::Receiver<StatusCode>>>,
    pub writes: Mutex<Vec<CartPayload>>,
    pub fetches: Mutex<usize>,
}

impl ScriptedGateway {
    pub fn with_remote(payload: CartPayload) -> Self {
        Self {
            fetch: Mutex::new(Some(Ok(payload))),
            write_status: Mutex::new(StatusCode::OK),
            gates: Mutex::new(VecDeque::new()),
            writes: Mutex::new(Vec::new()),
            fetches: Mutex::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::with_remote(CartPayload::default())
    }

    pub fn failing_fetch(status: StatusCode) -> Self {
        let gw = Self::empty();
        *gw.fetch.lock().unwrap() = Some(Err(status));
        gw
    }

    pub fn set_write_status(&self, status: StatusCode) {
        *self.write_status.lock().unwrap() = status;
    }

    fn default_write_status(&self) -> StatusCode {
        *self.write_status.lock().unwrap()
    }

    /// Holds the next unclaimed write until the returned sender fires.
    pub fn gate(&self) -> oneshot::Sender<StatusCode> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn writes(&self) -> Vec<CartPayload> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CartGateway for ScriptedGateway {
    async fn fetch_cart(&self) -> Result<CartPayload, GatewayError> {
        *self.fetches.lock().unwrap() += 1;
        let scripted = self.fetch.lock().unwrap().clone();
        match scripted {
            Some(Ok(payload)) => Ok(payload),
            Some(Err(status)) => Err(GatewayError::Remote { status }),
            None => Ok(CartPayload::default()),
        }
    }

    async fn write_cart(&self, payload: &CartPayload) -> Result<(), GatewayError> {
        self.writes.lock().unwrap().push(payload.clone());
        let gate = self.gates.lock().unwrap().pop_front();
        let status = match gate {
            Some(rx) => rx.await.unwrap_or(StatusCode::OK),
            None => self.default_write_status(),
        };
        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::Remote { status })
        }
    }
}

pub fn apple() -> cartsync_core::NewCartItem {
    cartsync_core::NewCartItem::new("a1", "Apple", 1.5)
}

pub fn apple_line(quantity: u32) -> CartItem {
    CartItem::new("a1", "Apple", 1.5, quantity)
}

/// Notifications seen on a UI change stream so far, in order.
pub fn drain_notifications(rx: &mut mpsc::UnboundedReceiver<UiState>) -> Vec<Notification> {
    let mut seen = Vec::new();
    while let Ok(state) = rx.try_recv() {
        if let Some(n) = state.notification {
            seen.push(n);
        }
    }
    seen
}

/// Lets spawned writes on the current-thread runtime make progress.
pub async fn yield_until(mut done: impl FnMut() -> bool) {
    for _ in 0..1000 {
        if done() {
            return;
        }
        tokio::task::yield_now().await;
    }
    panic!("condition not reached");
}
