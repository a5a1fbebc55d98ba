use cartsync_core::{CartItem, CartState, ItemId, Notification, UiState};

fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineVm {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: String,
    pub total_price: String,
}

impl From<&CartItem> for CartLineVm {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: format_price(item.unit_price),
            total_price: format_price(item.total_price),
        }
    }
}

/// Everything the presentation layer reads from both stores.
#[derive(Debug, Clone, PartialEq)]
pub struct CartVm {
    pub lines: Vec<CartLineVm>,
    pub total_quantity: u32,
    pub total_amount: String,
    pub changed: bool,
    pub cart_is_visible: bool,
    pub notification: Option<Notification>,
}

pub fn cart_vm(cart: &CartState, ui: &UiState) -> CartVm {
    CartVm {
        lines: cart.items.iter().map(CartLineVm::from).collect(),
        total_quantity: cart.total_quantity,
        total_amount: format_price(cart.total_amount()),
        changed: cart.changed,
        cart_is_visible: ui.cart_is_visible,
        notification: ui.notification.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cartsync_core::NotificationStatus;

    #[test]
    fn formats_lines_and_totals() {
        let cart = CartState {
            items: vec![
                CartItem::new("a1", "Apple", 1.5, 2),
                CartItem::new("b2", "Bread", 2.25, 1),
            ],
            total_quantity: 3,
            changed: true,
            revision: 2,
        };
        let ui = UiState {
            cart_is_visible: true,
            notification: Some(Notification::new(
                NotificationStatus::Success,
                "Success!",
                "Sent cart data successfully!",
            )),
        };

        let vm = cart_vm(&cart, &ui);

        assert_eq!(vm.lines[0].unit_price, "$1.50");
        assert_eq!(vm.lines[0].total_price, "$3.00");
        assert_eq!(vm.total_amount, "$5.25");
        assert_eq!(vm.total_quantity, 3);
        assert!(vm.changed && vm.cart_is_visible);
        assert_eq!(vm.notification, ui.notification);
    }
}
