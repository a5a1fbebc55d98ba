pub mod commands;
pub mod store;

pub use commands::CartCommand;
pub use store::{CartStore, Store, UiStore};
