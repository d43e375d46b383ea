pub mod fixtures;
pub mod remote;
pub mod source;

pub use fixtures::StaticShipmentStore;
pub use remote::HttpTrackingSource;
pub use source::{into_outcome, LookupError, TrackingSource};
