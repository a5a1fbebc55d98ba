use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use cartsync_core::{CartState, Notification, NotificationStatus};
use cartsync_infra::{CartGateway, GatewayErrorKind};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info};

use crate::app_core::{CartStore, UiStore};

/// How resolutions of overlapping writes reach the notification store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionOrder {
    /// Whichever write resolves last sets the notification, even if it was
    /// started before a newer write.
    LastResolved,
    /// Resolutions older than the newest notification already shown are dropped.
    #[default]
    LatestAttempt,
}

#[derive(Debug, Clone)]
pub struct SyncOptions {
    pub resolution: ResolutionOrder,
    /// Clear `changed` once a write is acknowledged, unless the cart moved on
    /// since the written snapshot.
    pub reset_changed_on_success: bool,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            resolution: ResolutionOrder::default(),
            reset_changed_on_success: true,
        }
    }
}

/// Result of one write attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub seq: u64,
    pub result: Result<(), GatewayErrorKind>,
    /// Whether the resolution notification was shown or dropped as stale.
    pub notified: bool,
}

/// Watches the cart store and persists every local change through the gateway,
/// reporting progress on the UI store.
pub struct SyncCoordinator<G> {
    gateway: Arc<G>,
    cart: CartStore,
    ui: UiStore,
    options: SyncOptions,
    runtime: Handle,

    initial_render: AtomicBool,
    next_seq: AtomicU64,
    last_shown: Mutex<u64>,
    writes: TaskTracker,
}

impl<G: CartGateway> SyncCoordinator<G> {
    pub fn new(
        gateway: Arc<G>,
        cart: CartStore,
        ui: UiStore,
        options: SyncOptions,
        runtime: Handle,
    ) -> Arc<Self> {
        Arc::new(Self {
            gateway,
            cart,
            ui,
            options,
            runtime,
            initial_render: AtomicBool::new(true),
            next_seq: AtomicU64::new(0),
            last_shown: Mutex::new(0),
            writes: TaskTracker::new(),
        })
    }

    /// Subscribes to the cart store. The subscription lapses once the
    /// coordinator is dropped.
    pub fn attach(self: &Arc<Self>) {
        let weak = Arc::downgrade(self);
        self.cart.subscribe_while(move |state| match weak.upgrade() {
            Some(coordinator) => {
                coordinator.on_cart_changed(state);
                true
            }
            None => false,
        });
    }

    /// Reacts to one cart change. Shows the pending notification and schedules
    /// the write before returning; the write itself runs on the runtime.
    pub fn on_cart_changed(
        self: &Arc<Self>,
        state: &CartState,
    ) -> Option<JoinHandle<WriteOutcome>> {
        if self.consume_initial_render() {
            debug!("first cart change observed, skipping sync");
            return None;
        }
        if !state.changed {
            return None;
        }

        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.notify(
            seq,
            Notification::new(
                NotificationStatus::Pending,
                cartsync_config::SENDING_TITLE,
                cartsync_config::SENDING_MESSAGE,
            ),
        );

        let payload = state.payload();
        let revision = state.revision;
        let this = self.clone();
        debug!(
            "scheduling cart write #{} (revision {}, {} items)",
            seq,
            revision,
            payload.items.len()
        );

        let handle = self.writes.spawn_on(
            async move {
                let result = this.gateway.write_cart(&payload).await;
                let notified = match &result {
                    Ok(()) => {
                        info!("cart write #{} succeeded", seq);
                        if this.options.reset_changed_on_success {
                            this.cart.mark_synced(revision);
                        }
                        this.notify(
                            seq,
                            Notification::new(
                                NotificationStatus::Success,
                                cartsync_config::SENT_TITLE,
                                cartsync_config::SENT_MESSAGE,
                            ),
                        )
                    }
                    Err(e) => {
                        error!("cart write #{} failed: {}", seq, e);
                        this.notify(
                            seq,
                            Notification::new(
                                NotificationStatus::Error,
                                cartsync_config::ERROR_TITLE,
                                cartsync_config::SEND_FAILED_MESSAGE,
                            ),
                        )
                    }
                };
                WriteOutcome {
                    seq,
                    result: result.map_err(|e| e.kind()),
                    notified,
                }
            },
            &self.runtime,
        );
        Some(handle)
    }

    fn notify(&self, seq: u64, notification: Notification) -> bool {
        let mut last = self
            .last_shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.options.resolution == ResolutionOrder::LatestAttempt && seq < *last {
            debug!(
                "dropping {:?} resolution of write #{}, #{} already shown",
                notification.status, seq, *last
            );
            return false;
        }
        *last = (*last).max(seq);
        self.ui.show(notification);
        true
    }

    /// Disarms the first-change suppression without waiting for a change.
    /// Returns whether it was still armed.
    pub fn consume_initial_render(&self) -> bool {
        self.initial_render.swap(false, Ordering::SeqCst)
    }

    /// Whether the next observed change will still be swallowed.
    pub fn is_initial_render(&self) -> bool {
        self.initial_render.load(Ordering::SeqCst)
    }

    /// Number of writes started so far.
    pub fn attempts(&self) -> u64 {
        self.next_seq.load(Ordering::SeqCst)
    }

    /// Waits until every write started so far has resolved.
    pub async fn settle(&self) {
        self.writes.close();
        self.writes.wait().await;
        self.writes.reopen();
    }
}
