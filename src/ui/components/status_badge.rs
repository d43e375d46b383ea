use dioxus::prelude::*;

use crate::domain::ShipmentStatus;

#[component]
pub fn StatusBadge(status: ShipmentStatus) -> Element {
    let tone = match status {
        ShipmentStatus::Delivered => "badge badge-done",
        ShipmentStatus::Pending | ShipmentStatus::Delayed => "badge badge-alert",
        _ => "badge badge-active",
    };

    rsx! {
        span { class: tone, "{status}" }
    }
}
