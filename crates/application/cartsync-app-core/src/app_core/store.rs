use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use cartsync_core::{
    reduce_cart, reduce_ui, CartAction, CartPayload, CartState, ItemId, NewCartItem,
    Notification, NotificationStatus, UiAction, UiState,
};
use tokio::sync::mpsc;

/// Returns `false` once the listener wants to be dropped.
type Listener<S> = Arc<dyn Fn(&S) -> bool + Send + Sync>;

/// Reducers return `None` when the action leaves the state as it is.
type Reducer<S, A> = fn(S, A) -> Option<S>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Single-slice store: state behind a mutex, a pure reducer, and change listeners.
///
/// Listeners run synchronously inside `apply`, in mutation order, after the
/// state lock is released, so they may read this or any other store. They
/// must not dispatch back into the same store.
pub struct Store<S, A> {
    state: Arc<Mutex<S>>,
    listeners: Arc<Mutex<Vec<Listener<S>>>>,
    dispatch: Arc<Mutex<()>>,
    reducer: Reducer<S, A>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            listeners: self.listeners.clone(),
            dispatch: self.dispatch.clone(),
            reducer: self.reducer,
        }
    }
}

impl<S, A> Store<S, A>
where
    S: Clone + Send + 'static,
{
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            listeners: Arc::new(Mutex::new(Vec::new())),
            dispatch: Arc::new(Mutex::new(())),
            reducer,
        }
    }

    pub fn state(&self) -> S {
        lock(&self.state).clone()
    }

    /// Reduces `action` into the state and returns whether it was applied.
    /// Listeners only hear about applied actions.
    pub fn apply(&self, action: A) -> bool {
        // Held until every listener has seen `next`, so publication order
        // matches mutation order across threads.
        let _dispatch = lock(&self.dispatch);

        let next = {
            let mut state = lock(&self.state);
            let Some(next) = (self.reducer)(state.clone(), action) else {
                return false;
            };
            *state = next.clone();
            next
        };

        let listeners = lock(&self.listeners).clone();
        let lapsed: Vec<Listener<S>> = listeners
            .into_iter()
            .filter(|listener| !listener(&next))
            .collect();
        if !lapsed.is_empty() {
            lock(&self.listeners)
                .retain(|listener| !lapsed.iter().any(|gone| Arc::ptr_eq(gone, listener)));
        }
        true
    }

    pub fn subscribe(&self, listener: impl Fn(&S) + Send + Sync + 'static) {
        self.subscribe_while(move |state| {
            listener(state);
            true
        });
    }

    pub(crate) fn subscribe_while(&self, listener: impl Fn(&S) -> bool + Send + Sync + 'static) {
        lock(&self.listeners).push(Arc::new(listener));
    }

    /// Channel of every subsequent state. Dropping the receiver unsubscribes.
    pub fn changes(&self) -> mpsc::UnboundedReceiver<S> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribe_while(move |state| tx.send(state.clone()).is_ok());
        rx
    }

    #[cfg(test)]
    fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }
}

pub type CartStore = Store<CartState, CartAction>;
pub type UiStore = Store<UiState, UiAction>;

impl Store<CartState, CartAction> {
    pub fn cart() -> Self {
        Self::new(CartState::default(), reduce_cart)
    }

    pub fn add_item(&self, item: NewCartItem) -> bool {
        self.apply(CartAction::AddItem(item))
    }

    pub fn remove_item(&self, id: impl Into<ItemId>) -> bool {
        self.apply(CartAction::RemoveItem { id: id.into() })
    }

    /// Hydration only: always publishes, and leaves `changed` false.
    pub fn replace_cart(&self, payload: CartPayload) -> bool {
        self.apply(CartAction::ReplaceCart(payload))
    }

    pub fn mark_synced(&self, revision: u64) -> bool {
        self.apply(CartAction::MarkSynced { revision })
    }
}

impl Store<UiState, UiAction> {
    pub fn ui() -> Self {
        Self::new(UiState::default(), reduce_ui)
    }

    pub fn show_notification(
        &self,
        status: NotificationStatus,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.show(Notification::new(status, title, message));
    }

    pub fn show(&self, notification: Notification) {
        self.apply(UiAction::ShowNotification(notification));
    }

    pub fn clear_notification(&self) {
        self.apply(UiAction::ClearNotification);
    }

    pub fn toggle_cart(&self) {
        self.apply(UiAction::ToggleCart);
    }

    pub fn notification(&self) -> Option<Notification> {
        lock(&self.state).notification.clone()
    }
}
