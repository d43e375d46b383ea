use dioxus::prelude::*;

use crate::domain::{derive_progress, ShipmentStatus, CANONICAL_STAGES};

#[component]
pub fn ProgressBar(status: ShipmentStatus) -> Element {
    let progress = derive_progress(status, &CANONICAL_STAGES);
    let percent = progress.percent;
    let stage_marker = progress.stage_index_signed();
    let reached_count = progress.reached_count();
    let total = CANONICAL_STAGES.len();
    let badge = if progress.is_complete() {
        "badge badge-done"
    } else {
        "badge badge-active"
    };
    let stages: Vec<(ShipmentStatus, bool)> = CANONICAL_STAGES
        .iter()
        .copied()
        .zip(progress.reached.iter().copied())
        .collect();

    rsx! {
        div { class: "panel",
            div { class: "progress-head",
                h4 { class: "label", "Transit Progress" }
                span { class: badge, "{percent}% Complete" }
            }
            p { class: "muted stage-count", "{reached_count} of {total} stages reached" }
            div { class: "progress-track", "data-stage": "{stage_marker}",
                div { class: "progress-fill", style: "width: {percent}%;" }
            }
            ol { class: "stage-list",
                for (stage, reached) in stages {
                    li {
                        key: "{stage.label()}",
                        class: if reached { "stage stage-reached" } else { "stage" },
                        span { class: "stage-dot" }
                        p { class: "stage-label", "{stage}" }
                    }
                }
            }
            if status.is_exception() {
                p { class: "stage-note",
                    "Shipment is {status}. Progress resumes once it is back on its scheduled route."
                }
            }
        }
    }
}
