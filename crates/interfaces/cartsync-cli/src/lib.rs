pub mod commands;

use cartsync_app_core::ResolutionOrder;
use clap::ValueEnum;

#[derive(ValueEnum, Clone, Debug, Copy)]
pub enum CliResolution {
    /// Keep the outcome of the newest write
    Latest,
    /// Show whichever write resolves last
    LastResolved,
}

impl From<CliResolution> for ResolutionOrder {
    fn from(r: CliResolution) -> Self {
        match r {
            CliResolution::Latest => ResolutionOrder::LatestAttempt,
            CliResolution::LastResolved => ResolutionOrder::LastResolved,
        }
    }
}
