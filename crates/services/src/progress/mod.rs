mod listeners;
mod service;
mod snapshot;

// Public API of the progress subsystem.
pub use listeners::SubscriptionId;
pub use service::ProgressService;
pub use snapshot::ProgressSnapshot;
