//! Data-access seam for shipment lookups.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

use crate::domain::{LookupOutcome, ShipmentRecord};

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("tracking service did not answer within {0:?}")]
    Timeout(Duration),
    #[error("tracking service responded with status {0}")]
    Upstream(u16),
    #[error("malformed shipment document: {0}")]
    Decode(String),
}

/// Resolves tracking identifiers to shipment records.
///
/// An unknown identifier is `Ok(None)`, not an error. Implementations do not
/// validate identifier format and must not share mutable state between
/// calls.
#[async_trait]
pub trait TrackingSource: Send + Sync {
    async fn lookup(&self, tracking_id: &str) -> Result<Option<ShipmentRecord>, LookupError>;

    fn name(&self) -> &'static str;
}

pub fn into_outcome(result: Result<Option<ShipmentRecord>, LookupError>) -> LookupOutcome {
    match result {
        Ok(Some(record)) => LookupOutcome::Found(record),
        Ok(None) => LookupOutcome::Absent,
        Err(err) => LookupOutcome::Failed(err.to_string()),
    }
}

/// Logs records whose status disagrees with their latest event. The record
/// is still handed out.
pub(crate) fn audit_record(source: &'static str, record: &ShipmentRecord) {
    if !record.is_status_consistent() {
        warn!(
            source,
            tracking_id = %record.tracking_id,
            current_status = %record.current_status,
            latest_event = ?record.latest_event().map(|event| event.status),
            "shipment status disagrees with latest history entry"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_mapping() {
        assert_eq!(into_outcome(Ok(None)), LookupOutcome::Absent);
        match into_outcome(Err(LookupError::Upstream(503))) {
            LookupOutcome::Failed(message) => assert!(message.contains("503")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
