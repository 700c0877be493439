pub mod reconcile;
pub mod sync;

pub use reconcile::{PushReport, Reconciler, SyncAction};
pub use sync::{PullReport, SyncLogic, SyncOptions, SyncReport, SyncState};
