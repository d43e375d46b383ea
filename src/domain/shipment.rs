use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date, PrimitiveDateTime};

/// Lifecycle states a shipment can be reported in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipmentStatus {
    #[serde(rename = "Order Received")]
    OrderReceived,
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "Customs Clearance")]
    CustomsClearance,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
    Pending,
    Delayed,
}

/// Forward-progress order of a shipment. Pending and Delayed sit outside it.
pub const CANONICAL_STAGES: [ShipmentStatus; 5] = [
    ShipmentStatus::OrderReceived,
    ShipmentStatus::InTransit,
    ShipmentStatus::CustomsClearance,
    ShipmentStatus::OutForDelivery,
    ShipmentStatus::Delivered,
];

impl ShipmentStatus {
    pub const ALL: [ShipmentStatus; 7] = [
        ShipmentStatus::OrderReceived,
        ShipmentStatus::InTransit,
        ShipmentStatus::CustomsClearance,
        ShipmentStatus::OutForDelivery,
        ShipmentStatus::Delivered,
        ShipmentStatus::Pending,
        ShipmentStatus::Delayed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShipmentStatus::OrderReceived => "Order Received",
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::CustomsClearance => "Customs Clearance",
            ShipmentStatus::OutForDelivery => "Out for Delivery",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Pending => "Pending",
            ShipmentStatus::Delayed => "Delayed",
        }
    }

    /// True for states that are not part of [`CANONICAL_STAGES`].
    pub fn is_exception(&self) -> bool {
        matches!(self, ShipmentStatus::Pending | ShipmentStatus::Delayed)
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown shipment status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for ShipmentStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        ShipmentStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownStatus(trimmed.to_string()))
    }
}

/// Latitude/longitude pair in degrees. Serialized as `[lat, lng]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(value: Coordinates) -> Self {
        [value.lat, value.lng]
    }
}

/// When a milestone happened. Some sources only record the day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    Day(Date),
    At(PrimitiveDateTime),
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = match self {
            Self::Day(date) => date.format(format_description!("[year]-[month]-[day]")),
            Self::At(at) => at.format(format_description!("[year]-[month]-[day] [hour]:[minute]")),
        };
        f.write_str(&rendered.map_err(|_| fmt::Error)?)
    }
}

/// One historical milestone of a shipment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackingEvent {
    pub location: String,
    pub timestamp: EventTime,
    pub status: ShipmentStatus,
    pub description: String,
}

/// A shipment as handed out by a tracking source.
///
/// `history` is kept in the order the source supplied it and is never
/// re-sorted; sources are expected to supply it chronologically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub tracking_id: String,
    pub origin: String,
    pub destination: String,
    pub current_status: ShipmentStatus,
    pub estimated_delivery: Date,
    pub history: Vec<TrackingEvent>,
    pub origin_coords: Coordinates,
    pub dest_coords: Coordinates,
    pub current_coords: Coordinates,
}

impl ShipmentRecord {
    pub fn latest_event(&self) -> Option<&TrackingEvent> {
        self.history.last()
    }

    /// Whether `current_status` matches the most recent history entry.
    /// An empty history counts as consistent.
    pub fn is_status_consistent(&self) -> bool {
        self.latest_event()
            .map(|event| event.status == self.current_status)
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    fn record(current_status: ShipmentStatus, history: Vec<TrackingEvent>) -> ShipmentRecord {
        ShipmentRecord {
            tracking_id: "BRG-000001".to_string(),
            origin: "Dubai, UAE".to_string(),
            destination: "London, UK".to_string(),
            current_status,
            estimated_delivery: date!(2025 - 05 - 24),
            history,
            origin_coords: Coordinates::new(25.2048, 55.2708),
            dest_coords: Coordinates::new(51.5074, -0.1278),
            current_coords: Coordinates::new(40.7128, 20.0),
        }
    }

    fn event(status: ShipmentStatus) -> TrackingEvent {
        TrackingEvent {
            location: "Dubai HQ".to_string(),
            timestamp: EventTime::At(datetime!(2025-05-18 09:00)),
            status,
            description: "Registered.".to_string(),
        }
    }

    #[test]
    fn status_labels_parse_back_case_insensitively() {
        for status in ShipmentStatus::ALL {
            assert_eq!(status.label().parse::<ShipmentStatus>(), Ok(status));
        }
        assert_eq!(
            " out FOR delivery ".parse::<ShipmentStatus>(),
            Ok(ShipmentStatus::OutForDelivery)
        );
        assert_eq!(
            "Lost".parse::<ShipmentStatus>(),
            Err(UnknownStatus("Lost".to_string()))
        );
    }

    #[test]
    fn only_pending_and_delayed_are_exceptions() {
        let exceptions: Vec<_> = ShipmentStatus::ALL
            .into_iter()
            .filter(ShipmentStatus::is_exception)
            .collect();
        assert_eq!(
            exceptions,
            vec![ShipmentStatus::Pending, ShipmentStatus::Delayed]
        );
        assert!(CANONICAL_STAGES.iter().all(|stage| !stage.is_exception()));
    }

    #[test]
    fn event_times_render_only_what_was_recorded() {
        assert_eq!(
            EventTime::At(datetime!(2025-05-20 02:15)).to_string(),
            "2025-05-20 02:15"
        );
        assert_eq!(EventTime::Day(date!(2025 - 05 - 01)).to_string(), "2025-05-01");
    }

    #[test]
    fn status_serializes_with_display_label() {
        let json = serde_json::to_string(&ShipmentStatus::CustomsClearance).unwrap();
        assert_eq!(json, "\"Customs Clearance\"");
    }

    #[test]
    fn coordinates_serialize_as_lat_lng_pair() {
        let coords = Coordinates::new(6.5244, 3.3792);
        assert_eq!(serde_json::to_string(&coords).unwrap(), "[6.5244,3.3792]");
        let parsed: Coordinates = serde_json::from_str("[35.6762,139.6503]").unwrap();
        assert_eq!(parsed, Coordinates::new(35.6762, 139.6503));
    }

    #[test]
    fn consistency_compares_against_latest_event() {
        let consistent = record(
            ShipmentStatus::InTransit,
            vec![
                event(ShipmentStatus::OrderReceived),
                event(ShipmentStatus::InTransit),
            ],
        );
        assert!(consistent.is_status_consistent());

        let drifted = record(
            ShipmentStatus::Delivered,
            vec![event(ShipmentStatus::OrderReceived)],
        );
        assert!(!drifted.is_status_consistent());

        assert!(record(ShipmentStatus::Pending, Vec::new()).is_status_consistent());
    }
}
