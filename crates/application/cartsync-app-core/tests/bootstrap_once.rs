mod common;

use std::sync::Arc;

use cartsync_app_core::{BootOutcome, BootstrapLoader, CartStore, UiStore};
use cartsync_core::CartPayload;
use common::{apple_line, ScriptedGateway};

#[tokio::test]
async fn loader_fetches_once_per_lifetime() {
    let remote = CartPayload {
        items: vec![apple_line(2)],
        total_quantity: 2,
    };
    let gateway = Arc::new(ScriptedGateway::with_remote(remote.clone()));
    let cart = CartStore::cart();
    let loader = BootstrapLoader::new(gateway.clone(), cart.clone(), UiStore::ui());

    let first = loader.load().await;
    let second = loader.load().await;

    assert_eq!(
        first,
        BootOutcome::Hydrated {
            items: 1,
            total_quantity: 2
        }
    );
    assert_eq!(second, BootOutcome::AlreadyRan);
    assert_eq!(*gateway.fetches.lock().unwrap(), 1);
    assert_eq!(cart.state().payload(), remote);
}

#[tokio::test]
async fn hydration_overrides_local_edits() {
    let gateway = Arc::new(ScriptedGateway::empty());
    let cart = CartStore::cart();
    cart.add_item(common::apple());
    assert!(cart.state().changed);

    BootstrapLoader::new(gateway, cart.clone(), UiStore::ui())
        .load()
        .await;

    let state = cart.state();
    assert!(state.items.is_empty());
    assert!(!state.changed);
}
