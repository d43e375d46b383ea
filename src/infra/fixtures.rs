//! Static shipment table standing in for a fulfilment backend.

use std::{collections::HashMap, time::Duration};

use async_trait::async_trait;
use time::macros::{date, datetime};
use tracing::debug;

use crate::domain::{Coordinates, EventTime, ShipmentRecord, ShipmentStatus, TrackingEvent};
use crate::infra::source::{audit_record, LookupError, TrackingSource};

/// Simulated round-trip of the fixture store.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

pub struct StaticShipmentStore {
    shipments: HashMap<String, ShipmentRecord>,
    latency: Duration,
}

impl StaticShipmentStore {
    pub fn new() -> Self {
        Self::from_records(fixture_shipments())
    }

    pub fn from_records(records: impl IntoIterator<Item = ShipmentRecord>) -> Self {
        Self {
            shipments: records
                .into_iter()
                .map(|record| (record.tracking_id.clone(), record))
                .collect(),
            latency: DEFAULT_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn shipment_count(&self) -> usize {
        self.shipments.len()
    }
}

impl Default for StaticShipmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TrackingSource for StaticShipmentStore {
    async fn lookup(&self, tracking_id: &str) -> Result<Option<ShipmentRecord>, LookupError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let record = self.shipments.get(tracking_id).cloned();
        debug!(
            source = self.name(),
            tracking_id,
            found = record.is_some(),
            "fixture lookup finished"
        );
        if let Some(record) = record.as_ref() {
            audit_record(self.name(), record);
        }
        Ok(record)
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

fn fixture_shipments() -> Vec<ShipmentRecord> {
    vec![
        ShipmentRecord {
            tracking_id: "BRG-778899".to_string(),
            origin: "Dubai, UAE".to_string(),
            destination: "London, UK".to_string(),
            current_status: ShipmentStatus::InTransit,
            estimated_delivery: date!(2025 - 05 - 24),
            origin_coords: Coordinates::new(25.2048, 55.2708),
            dest_coords: Coordinates::new(51.5074, -0.1278),
            current_coords: Coordinates::new(40.7128, 20.0),
            history: vec![
                TrackingEvent {
                    status: ShipmentStatus::OrderReceived,
                    location: "Dubai HQ".to_string(),
                    timestamp: EventTime::At(datetime!(2025-05-18 09:00)),
                    description: "Shipment has been registered and picked up from the warehouse."
                        .to_string(),
                },
                TrackingEvent {
                    status: ShipmentStatus::InTransit,
                    location: "Dubai International Airport".to_string(),
                    timestamp: EventTime::At(datetime!(2025-05-19 14:30)),
                    description: "Package arrived at sorting facility and is being processed for air transit."
                        .to_string(),
                },
                TrackingEvent {
                    status: ShipmentStatus::InTransit,
                    location: "In Transit - Air".to_string(),
                    timestamp: EventTime::At(datetime!(2025-05-20 02:15)),
                    description: "Shipment departed from origin airport.".to_string(),
                },
            ],
        },
        ShipmentRecord {
            tracking_id: "BRG-112233".to_string(),
            origin: "Tokyo, JP".to_string(),
            destination: "Lagos, NG".to_string(),
            current_status: ShipmentStatus::Delivered,
            estimated_delivery: date!(2025 - 05 - 15),
            origin_coords: Coordinates::new(35.6762, 139.6503),
            dest_coords: Coordinates::new(6.5244, 3.3792),
            current_coords: Coordinates::new(6.5244, 3.3792),
            history: vec![
                TrackingEvent {
                    status: ShipmentStatus::OrderReceived,
                    location: "Tokyo Office".to_string(),
                    timestamp: EventTime::Day(date!(2025 - 05 - 01)),
                    description: "Cargo received.".to_string(),
                },
                TrackingEvent {
                    status: ShipmentStatus::Delivered,
                    location: "Lagos Residence".to_string(),
                    timestamp: EventTime::Day(date!(2025 - 05 - 15)),
                    description: "Package successfully delivered to recipient.".to_string(),
                },
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn instant_store() -> StaticShipmentStore {
        StaticShipmentStore::new().with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn known_identifier_resolves_in_transit() {
        let record = instant_store()
            .lookup("BRG-778899")
            .await
            .unwrap()
            .expect("fixture shipment");
        assert_eq!(record.tracking_id, "BRG-778899");
        assert_eq!(record.current_status, ShipmentStatus::InTransit);
        assert_eq!(
            record.latest_event().map(|event| event.status),
            Some(ShipmentStatus::InTransit)
        );
    }

    #[tokio::test]
    async fn unknown_and_empty_identifiers_are_absent() {
        let store = instant_store();
        assert!(store.lookup("BRG-000000").await.unwrap().is_none());
        assert!(store.lookup("").await.unwrap().is_none());
        // Keys are exact; normalisation is the caller's job.
        assert!(store.lookup("brg-778899").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn history_keeps_insertion_order() {
        let record = instant_store().lookup("BRG-778899").await.unwrap().unwrap();
        let locations: Vec<_> = record
            .history
            .iter()
            .map(|event| event.location.as_str())
            .collect();
        assert_eq!(
            locations,
            vec!["Dubai HQ", "Dubai International Airport", "In Transit - Air"]
        );
    }

    #[tokio::test]
    async fn day_only_history_keeps_no_clock_time() {
        let record = instant_store().lookup("BRG-112233").await.unwrap().unwrap();
        let rendered: Vec<_> = record
            .history
            .iter()
            .map(|event| event.timestamp.to_string())
            .collect();
        assert_eq!(rendered, vec!["2025-05-01", "2025-05-15"]);
    }

    #[tokio::test]
    async fn fixtures_are_status_consistent() {
        let store = instant_store();
        assert_eq!(store.shipment_count(), 2);
        for id in ["BRG-778899", "BRG-112233"] {
            let record = store.lookup(id).await.unwrap().unwrap();
            assert!(record.is_status_consistent(), "{id} drifted");
        }
    }

    #[tokio::test]
    async fn concurrent_lookups_are_independent() {
        let store = StaticShipmentStore::new().with_latency(Duration::from_millis(20));
        let (first, second, missing) = tokio::join!(
            store.lookup("BRG-778899"),
            store.lookup("BRG-112233"),
            store.lookup("BRG-999999"),
        );
        assert_eq!(first.unwrap().unwrap().destination, "London, UK");
        assert_eq!(
            second.unwrap().unwrap().current_status,
            ShipmentStatus::Delivered
        );
        assert!(missing.unwrap().is_none());
    }

    #[tokio::test]
    async fn latency_is_applied() {
        let store = StaticShipmentStore::new().with_latency(Duration::from_millis(30));
        let started = Instant::now();
        store.lookup("BRG-112233").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}
