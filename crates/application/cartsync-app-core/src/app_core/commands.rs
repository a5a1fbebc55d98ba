use cartsync_core::{ItemId, NewCartItem};

#[derive(Debug, Clone)]
pub enum CartCommand {
    // Cart
    AddItem(NewCartItem),
    RemoveItem(ItemId),

    // Presentation
    ToggleCart,
    DismissNotification,
}
