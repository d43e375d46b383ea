use dioxus::prelude::*;
use time::{macros::format_description, Date};

use crate::domain::ShipmentRecord;
use crate::ui::components::status_badge::StatusBadge;

#[component]
pub fn ShipmentSummary(shipment: ShipmentRecord) -> Element {
    let eta = format_date(shipment.estimated_delivery);

    rsx! {
        div { class: "panel",
            div { class: "summary-head",
                div {
                    h3 { class: "label", "Reference ID" }
                    p { class: "reference", "{shipment.tracking_id}" }
                }
                div { class: "summary-status",
                    span { class: "label", "Status" }
                    StatusBadge { status: shipment.current_status }
                }
            }
            FactRow { label: "Origin", value: shipment.origin.clone() }
            FactRow { label: "Destination", value: shipment.destination.clone() }
            FactRow { label: "ETA Window", value: eta, highlight: true }
        }
    }
}

#[component]
fn FactRow(label: &'static str, value: String, #[props(default)] highlight: bool) -> Element {
    let value_class = if highlight { "fact-value fact-eta" } else { "fact-value" };
    rsx! {
        div { class: "fact-row",
            span { class: "label", "{label}" }
            span { class: value_class, "{value}" }
        }
    }
}

pub fn format_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}
