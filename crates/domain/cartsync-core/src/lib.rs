use serde::{Deserialize, Serialize};

pub mod cart;
pub mod ui;

pub use cart::{reduce_cart, CartAction};
pub use ui::{reduce_ui, Notification, NotificationStatus, UiAction, UiState};

pub type ItemId = String;

/// One cart line. `total_price` is always `unit_price * quantity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    #[serde(rename = "price")]
    pub unit_price: f64,
    pub quantity: u32,
    pub total_price: f64,
}

impl CartItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        unit_price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity,
            total_price: unit_price * f64::from(quantity),
        }
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.total_price = self.unit_price * f64::from(quantity);
    }
}

/// Input for adding units of a product to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl NewCartItem {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            quantity: 1,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// The document exchanged with the remote endpoint. Writes are full overwrites.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartPayload {
    pub items: Vec<CartItem>,
    pub total_quantity: u32,
}

/// Lenient shape of the stored document as it comes back from a read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDocument {
    #[serde(default)]
    pub items: Option<Vec<CartItem>>,
    #[serde(default)]
    pub total_quantity: Option<u32>,
}

impl From<CartDocument> for CartPayload {
    fn from(doc: CartDocument) -> Self {
        let items = doc.items.unwrap_or_default();
        // Absent total falls back to the item sum so the cart invariant holds.
        let total_quantity = doc
            .total_quantity
            .unwrap_or_else(|| items.iter().map(|i| i.quantity).sum());
        Self {
            items,
            total_quantity,
        }
    }
}

/// Authoritative in-memory cart.
///
/// `revision` counts applied mutations (hydration included) and never leaves
/// the process; it lets a write acknowledgement tell whether the cart moved on
/// since the snapshot that was sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    pub items: Vec<CartItem>,
    pub total_quantity: u32,
    pub changed: bool,
    pub revision: u64,
}

impl CartState {
    pub fn payload(&self) -> CartPayload {
        CartPayload {
            items: self.items.clone(),
            total_quantity: self.total_quantity,
        }
    }

    pub fn item(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(|i| i.total_price).sum()
    }
}
