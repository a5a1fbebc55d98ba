use anyhow::{Context, Result};
use cartsync_app_core::{BootOutcome, CartCommand, CartSyncApp, CartVm, SyncOptions};
use cartsync_core::NewCartItem;
use tracing::debug;

/// A single mutation applied after hydration. `None` only shows the cart.
pub async fn run(
    endpoint: &str,
    options: SyncOptions,
    command: Option<CartCommand>,
) -> Result<CartVm> {
    let app = CartSyncApp::connect(endpoint, options)
        .await
        .with_context(|| format!("Failed to set up cart endpoint {endpoint}"))?;

    if let BootOutcome::Hydrated {
        items,
        total_quantity,
    } = app.boot_outcome()
    {
        debug!("hydrated {} lines, {} units", items, total_quantity);
    }

    if let Some(command) = command {
        app.dispatch(command);
    }
    app.settle().await;
    Ok(app.view())
}

pub async fn cmd_show(endpoint: &str, options: SyncOptions) -> Result<CartVm> {
    run(endpoint, options, None).await
}

pub async fn cmd_add(
    endpoint: &str,
    options: SyncOptions,
    id: String,
    name: String,
    price: f64,
    quantity: u32,
) -> Result<CartVm> {
    let item = NewCartItem::new(id, name, price).with_quantity(quantity);
    run(endpoint, options, Some(CartCommand::AddItem(item))).await
}

pub async fn cmd_remove(endpoint: &str, options: SyncOptions, id: String) -> Result<CartVm> {
    run(endpoint, options, Some(CartCommand::RemoveItem(id))).await
}

pub fn render(vm: &CartVm) -> String {
    let mut out = String::new();
    if let Some(n) = &vm.notification {
        out.push_str(&format!("[{:?}] {} {}\n", n.status, n.title, n.message));
    }
    if vm.lines.is_empty() {
        out.push_str(":: Cart is empty\n");
    }
    for line in &vm.lines {
        out.push_str(&format!(
            "   {:<12} {:>3} x {:>8} = {:>9}\n",
            line.name, line.quantity, line.unit_price, line.total_price
        ));
    }
    out.push_str(&format!(
        ":: {} items, total {}\n",
        vm.total_quantity, vm.total_amount
    ));
    out
}
