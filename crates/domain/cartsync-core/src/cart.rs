use crate::{CartPayload, CartState, ItemId, NewCartItem};

#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    // Local mutations
    AddItem(NewCartItem),
    RemoveItem { id: ItemId },

    // Hydration from the remote document
    ReplaceCart(CartPayload),

    // Write acknowledged for the snapshot taken at `revision`
    MarkSynced { revision: u64 },
}

/// Applies `action` and returns the next state, or `None` when the action does
/// not alter the cart (zero-quantity add, unknown id, stale acknowledgement).
pub fn reduce_cart(mut state: CartState, action: CartAction) -> Option<CartState> {
    match action {
        CartAction::AddItem(new_item) => {
            if new_item.quantity == 0 {
                return None;
            }
            match state.items.iter_mut().find(|i| i.id == new_item.id) {
                Some(existing) => {
                    let quantity = existing.quantity.saturating_add(new_item.quantity);
                    existing.set_quantity(quantity);
                }
                None => state.items.push(crate::CartItem::new(
                    new_item.id,
                    new_item.name,
                    new_item.price,
                    new_item.quantity,
                )),
            }
            state.total_quantity = state.total_quantity.saturating_add(new_item.quantity);
            state.changed = true;
            state.revision += 1;
        }

        CartAction::RemoveItem { id } => {
            let ix = state.items.iter().position(|i| i.id == id)?;
            let remaining = state.items[ix].quantity.saturating_sub(1);
            if remaining == 0 {
                state.items.remove(ix);
            } else {
                state.items[ix].set_quantity(remaining);
            }
            state.total_quantity = state.total_quantity.saturating_sub(1);
            state.changed = true;
            state.revision += 1;
        }

        CartAction::ReplaceCart(payload) => {
            state.items = payload.items;
            state.total_quantity = payload.total_quantity;
            state.changed = false;
            state.revision += 1;
        }

        CartAction::MarkSynced { revision } => {
            if state.revision != revision || !state.changed {
                return None;
            }
            state.changed = false;
        }
    }
    Some(state)
}
