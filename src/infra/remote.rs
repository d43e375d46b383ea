//! HTTP-backed tracking source.
//!
//! - `GET {base}/shipments/{id}`: 200 carries a shipment document, 404 means
//!   the identifier is unknown, anything else is an upstream failure.
//! - Every request is bounded by a timeout; there are no retries.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use time::{macros::format_description, Date, PrimitiveDateTime};
use tracing::{debug, warn};

use crate::domain::{Coordinates, EventTime, ShipmentRecord, ShipmentStatus, TrackingEvent};
use crate::infra::source::{audit_record, LookupError, TrackingSource};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("freight-tracker/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct HttpTrackingSource {
    http: Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpTrackingSource {
    pub fn new(base: &str) -> Result<Self, LookupError> {
        let mut base_url = Url::parse(base)?;
        if base_url.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        // Drop a trailing slash so segments are appended, not replaced.
        if let Ok(mut segments) = base_url.path_segments_mut() {
            segments.pop_if_empty();
        }
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            http,
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn shipment_url(&self, tracking_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push("shipments").push(tracking_id);
        }
        url
    }

    async fn fetch(&self, url: Url) -> Result<Option<ShipmentRecord>, LookupError> {
        let response = self.http.get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body = response.bytes().await?;
                let document: ShipmentDto = serde_json::from_slice(&body)
                    .map_err(|err| LookupError::Decode(format!("shipment document: {err}")))?;
                ShipmentRecord::try_from(document).map(Some)
            }
            status => Err(LookupError::Upstream(status.as_u16())),
        }
    }
}

#[async_trait]
impl TrackingSource for HttpTrackingSource {
    async fn lookup(&self, tracking_id: &str) -> Result<Option<ShipmentRecord>, LookupError> {
        if tracking_id.is_empty() {
            return Ok(None);
        }

        let url = self.shipment_url(tracking_id);
        debug!(source = self.name(), %url, "requesting shipment");
        let started = Instant::now();

        let result = match tokio::time::timeout(self.timeout, self.fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout(self.timeout)),
        };
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(Some(record)) => {
                debug!(source = self.name(), tracking_id, elapsed_ms, "shipment found");
                audit_record(self.name(), record);
            }
            Ok(None) => debug!(source = self.name(), tracking_id, elapsed_ms, "shipment unknown"),
            Err(error) => warn!(
                source = self.name(),
                tracking_id,
                elapsed_ms,
                %error,
                "shipment lookup failed"
            ),
        }
        result
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShipmentDto {
    tracking_id: String,
    origin: String,
    destination: String,
    current_status: String,
    estimated_delivery: String,
    #[serde(default)]
    history: Vec<TrackingEventDto>,
    origin_coords: [f64; 2],
    dest_coords: [f64; 2],
    current_coords: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct TrackingEventDto {
    location: String,
    timestamp: String,
    status: String,
    #[serde(default)]
    description: String,
}

impl TryFrom<ShipmentDto> for ShipmentRecord {
    type Error = LookupError;

    fn try_from(dto: ShipmentDto) -> Result<Self, Self::Error> {
        let history = dto
            .history
            .into_iter()
            .map(TrackingEvent::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            tracking_id: dto.tracking_id,
            origin: dto.origin,
            destination: dto.destination,
            current_status: parse_status(&dto.current_status)?,
            estimated_delivery: parse_date(&dto.estimated_delivery)?,
            history,
            origin_coords: Coordinates::from(dto.origin_coords),
            dest_coords: Coordinates::from(dto.dest_coords),
            current_coords: Coordinates::from(dto.current_coords),
        })
    }
}

impl TryFrom<TrackingEventDto> for TrackingEvent {
    type Error = LookupError;

    fn try_from(dto: TrackingEventDto) -> Result<Self, Self::Error> {
        Ok(Self {
            location: dto.location,
            timestamp: parse_timestamp(&dto.timestamp)?,
            status: parse_status(&dto.status)?,
            description: dto.description,
        })
    }
}

fn parse_status(raw: &str) -> Result<ShipmentStatus, LookupError> {
    raw.parse()
        .map_err(|err: crate::domain::UnknownStatus| LookupError::Decode(err.to_string()))
}

fn parse_date(raw: &str) -> Result<Date, LookupError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|err| LookupError::Decode(format!("date {raw:?}: {err}")))
}

/// `YYYY-MM-DD HH:MM`, optionally followed by an AM/PM marker which is
/// ignored because the clock is already 24-hour, or a bare date.
fn parse_timestamp(raw: &str) -> Result<EventTime, LookupError> {
    let trimmed = raw.trim();
    let without_marker = ["AM", "PM", "am", "pm"]
        .iter()
        .find_map(|marker| trimmed.strip_suffix(marker))
        .map(str::trim_end)
        .unwrap_or(trimmed);

    if let Ok(timestamp) = PrimitiveDateTime::parse(
        without_marker,
        format_description!("[year]-[month]-[day] [hour]:[minute]"),
    ) {
        return Ok(EventTime::At(timestamp));
    }

    parse_date(without_marker)
        .map(EventTime::Day)
        .map_err(|_| LookupError::Decode(format!("timestamp {raw:?} is not a date or date-time")))
}
