use uuid::Uuid;

use super::shipment::ShipmentRecord;
use super::tracking_id::NOT_FOUND_MESSAGE;

pub const UNAVAILABLE_MESSAGE: &str =
    "Tracking service is unavailable right now. Please try again shortly.";

/// Identifies one lookup so a late answer can be matched against the view.
pub type RequestId = Uuid;

/// What a lookup produced, stripped of transport details.
#[derive(Clone, Debug, PartialEq)]
pub enum LookupOutcome {
    Found(ShipmentRecord),
    Absent,
    Failed(String),
}

/// State of the tracking panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackingState {
    /// Raw text in the input, already upper-cased as typed.
    pub query: String,
    pub loading: bool,
    pub shipment: Option<ShipmentRecord>,
    pub error: Option<String>,
    active_request: Option<RequestId>,
}

impl TrackingState {
    /// Starts a lookup. Any request still in flight is
    /// superseded and its answer will be ignored.
    pub fn begin(&mut self) -> RequestId {
        let request = Uuid::new_v4();
        self.loading = true;
        self.error = None;
        self.active_request = Some(request);
        request
    }

    pub fn active_request(&self) -> Option<RequestId> {
        self.active_request
    }

    /// Applies `outcome` if `request` is still the active lookup. Returns
    /// false when the answer arrived for a superseded request.
    pub fn resolve(&mut self, request: RequestId, outcome: LookupOutcome) -> bool {
        if self.active_request != Some(request) {
            return false;
        }
        self.active_request = None;
        self.loading = false;
        match outcome {
            LookupOutcome::Found(record) => {
                self.shipment = Some(record);
                self.error = None;
            }
            LookupOutcome::Absent => {
                self.shipment = None;
                self.error = Some(NOT_FOUND_MESSAGE.to_string());
            }
            LookupOutcome::Failed(_) => {
                self.shipment = None;
                self.error = Some(UNAVAILABLE_MESSAGE.to_string());
            }
        }
        true
    }
}
