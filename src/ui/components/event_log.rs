use dioxus::prelude::*;

use crate::domain::TrackingEvent;

/// Shipment history, rendered in the order the source supplied it.
#[component]
pub fn EventLog(history: Vec<TrackingEvent>) -> Element {
    let last = history.len().saturating_sub(1);

    rsx! {
        div { class: "panel panel-dark",
            h4 { class: "label", "Event Logs" }
            if history.is_empty() {
                p { class: "muted", "No events recorded yet." }
            }
            ol { class: "event-log",
                for (idx, event) in history.into_iter().enumerate() {
                    li {
                        key: "{idx}",
                        class: if idx == last { "event event-latest" } else { "event" },
                        span { class: "event-dot" }
                        div {
                            p { class: "event-time", "{event.timestamp}" }
                            h5 { class: "event-status", "{event.status}" }
                            p { class: "event-location", "{event.location}" }
                            p { class: "event-description", "{event.description}" }
                        }
                    }
                }
            }
        }
    }
}
