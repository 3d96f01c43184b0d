pub mod snapshot;
pub mod snapshot_errors;

pub use snapshot_errors::SnapshotError;
