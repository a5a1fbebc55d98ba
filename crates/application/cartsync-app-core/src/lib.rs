pub mod app;
pub mod app_core;
pub mod bootstrap;
pub mod coordinator;
pub mod viewmodel;

pub use app::CartSyncApp;
pub use app_core::*;
pub use bootstrap::{BootOutcome, BootstrapLoader};
pub use coordinator::{ResolutionOrder, SyncCoordinator, SyncOptions, WriteOutcome};
pub use viewmodel::*;
