use std::sync::Arc;

use cartsync_infra::{CartGateway, GatewayError, HttpCartGateway};
use tokio::runtime::Handle;

use crate::app_core::{CartCommand, CartStore, UiStore};
use crate::bootstrap::{BootOutcome, BootstrapLoader};
use crate::coordinator::{SyncCoordinator, SyncOptions};
use crate::viewmodel::{cart_vm, CartVm};

/// Both stores with the sync coordinator attached and the cart hydrated.
pub struct CartSyncApp<G> {
    pub cart: CartStore,
    pub ui: UiStore,
    gateway: Arc<G>,
    coordinator: Arc<SyncCoordinator<G>>,
    boot: BootOutcome,
}

impl CartSyncApp<HttpCartGateway> {
    /// Starts against an HTTP cart endpoint.
    pub async fn connect(endpoint: &str, options: SyncOptions) -> Result<Self, GatewayError> {
        let client = cartsync_infra::default_http_client()?;
        let gateway = HttpCartGateway::new(client, endpoint)?;
        Ok(Self::start(gateway, options).await)
    }
}

impl<G: CartGateway> CartSyncApp<G> {
    /// Subscribes the coordinator before hydrating, so the hydration is the
    /// change that consumes the initial-render flag. When hydration fails the
    /// flag is consumed anyway and the next local change syncs.
    pub async fn start(gateway: G, options: SyncOptions) -> Self {
        let gateway = Arc::new(gateway);
        let cart = CartStore::cart();
        let ui = UiStore::ui();

        let coordinator = SyncCoordinator::new(
            gateway.clone(),
            cart.clone(),
            ui.clone(),
            options,
            Handle::current(),
        );
        coordinator.attach();

        let boot = BootstrapLoader::new(gateway.clone(), cart.clone(), ui.clone())
            .load()
            .await;
        if matches!(boot, BootOutcome::Failed(_)) {
            coordinator.consume_initial_render();
        }

        Self {
            cart,
            ui,
            gateway,
            coordinator,
            boot,
        }
    }

    pub fn dispatch(&self, cmd: CartCommand) {
        match cmd {
            CartCommand::AddItem(item) => {
                self.cart.add_item(item);
            }
            CartCommand::RemoveItem(id) => {
                self.cart.remove_item(id);
            }
            CartCommand::ToggleCart => self.ui.toggle_cart(),
            CartCommand::DismissNotification => self.ui.clear_notification(),
        }
    }

    pub fn boot_outcome(&self) -> &BootOutcome {
        &self.boot
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn coordinator(&self) -> &Arc<SyncCoordinator<G>> {
        &self.coordinator
    }

    /// Waits for every in-flight write to resolve.
    pub async fn settle(&self) {
        self.coordinator.settle().await;
    }

    pub fn view(&self) -> CartVm {
        cart_vm(&self.cart.state(), &self.ui.state())
    }
}
