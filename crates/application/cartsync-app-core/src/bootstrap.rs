use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use cartsync_core::NotificationStatus;
use cartsync_infra::{CartGateway, GatewayErrorKind};
use tracing::{error, info, warn};

use crate::app_core::{CartStore, UiStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootOutcome {
    Hydrated { items: usize, total_quantity: u32 },
    Failed(GatewayErrorKind),
    AlreadyRan,
}

/// Pulls the remote cart into the cart store, once.
pub struct BootstrapLoader<G> {
    gateway: Arc<G>,
    cart: CartStore,
    ui: UiStore,
    ran: AtomicBool,
}

impl<G: CartGateway> BootstrapLoader<G> {
    pub fn new(gateway: Arc<G>, cart: CartStore, ui: UiStore) -> Self {
        Self {
            gateway,
            cart,
            ui,
            ran: AtomicBool::new(false),
        }
    }

    pub async fn load(&self) -> BootOutcome {
        if self.ran.swap(true, Ordering::SeqCst) {
            warn!("cart bootstrap requested again, ignoring");
            return BootOutcome::AlreadyRan;
        }

        match self.gateway.fetch_cart().await {
            Ok(payload) => {
                let outcome = BootOutcome::Hydrated {
                    items: payload.items.len(),
                    total_quantity: payload.total_quantity,
                };
                info!(
                    "hydrated cart with {} items (total quantity {})",
                    payload.items.len(),
                    payload.total_quantity
                );
                self.cart.replace_cart(payload);
                outcome
            }
            Err(e) => {
                error!("fetching cart failed: {}", e);
                self.ui.show_notification(
                    NotificationStatus::Error,
                    cartsync_config::ERROR_TITLE,
                    cartsync_config::FETCH_FAILED_MESSAGE,
                );
                BootOutcome::Failed(e.kind())
            }
        }
    }
}
