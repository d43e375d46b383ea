use dioxus::prelude::*;

use crate::{
    app::{submit_tracking_query, SharedSource},
    domain::{TrackingState, TRACKING_ID_HINT},
    ui::components::{
        event_log::EventLog, progress_bar::ProgressBar, route_map::RouteMap,
        shipment_summary::ShipmentSummary, toast::ToastMessage,
    },
};

#[component]
pub fn TrackingPage() -> Element {
    let mut tracking = use_context::<Signal<TrackingState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let source = use_context::<SharedSource>();

    let view = tracking();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submit_tracking_query(tracking, toasts, source.clone());
    };

    rsx! {
        section { id: "tracking", class: "tracking",
            div { class: "section-head",
                span { class: "eyebrow", "Real-time visibility" }
                h2 { "Command Center." }
                p { class: "muted",
                    "Get instant end-to-end visibility on your global cargo with our encrypted tracking system."
                }
            }

            form { class: "tracking-form", onsubmit: on_submit,
                input {
                    id: "tracking-input",
                    r#type: "text",
                    value: "{view.query}",
                    placeholder: TRACKING_ID_HINT,
                    oninput: move |evt| {
                        tracking.with_mut(|st| st.query = evt.value().to_uppercase());
                    },
                }
                button {
                    r#type: "submit",
                    disabled: view.loading,
                    if view.loading { "SYSTEM SEARCHING..." } else { "SYNC SHIPMENT" }
                }
            }

            if let Some(error) = view.error.as_ref() {
                p { class: "tracking-error", "{error}" }
            }

            if let Some(shipment) = view.shipment.as_ref() {
                div { class: "tracking-result",
                    div { class: "result-data",
                        ShipmentSummary { shipment: shipment.clone() }
                        EventLog { history: shipment.history.clone() }
                    }
                    div { class: "result-visuals",
                        RouteMap {
                            origin: shipment.origin_coords,
                            destination: shipment.dest_coords,
                            current: shipment.current_coords,
                        }
                        ProgressBar { status: shipment.current_status }
                    }
                }
            }
        }
    }
}
