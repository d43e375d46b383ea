//! Shipment model, progress and map arithmetic live here.

pub mod app_state;
pub mod map;
pub mod progress;
pub mod shipment;
pub mod tracking_id;

pub use app_state::{LookupOutcome, RequestId, TrackingState};
pub use progress::derive_progress;
pub use shipment::{
    Coordinates, EventTime, ShipmentRecord, ShipmentStatus, TrackingEvent, UnknownStatus,
    CANONICAL_STAGES,
};
pub use tracking_id::{convention_notice, normalize_tracking_input, TRACKING_ID_HINT};
