use dioxus::prelude::*;

use crate::domain::{
    map::{graticule, project, route_arc, MAP_HEIGHT, MAP_WIDTH},
    Coordinates,
};

#[component]
pub fn RouteMap(origin: Coordinates, destination: Coordinates, current: Coordinates) -> Element {
    let grid = graticule();
    let arc = route_arc(origin, destination);
    let from = project(origin);
    let to = project(destination);
    let here = project(current);
    let view_box = format!("0 0 {MAP_WIDTH} {MAP_HEIGHT}");

    rsx! {
        div { class: "map-frame",
            svg {
                class: "map",
                view_box: "{view_box}",
                preserve_aspect_ratio: "xMidYMid meet",
                for (idx, line) in grid.into_iter().enumerate() {
                    path { key: "{idx}", d: "{line}", class: "map-grid" }
                }
                path { d: "{arc}", class: "map-route-glow" }
                path { d: "{arc}", class: "map-route" }
                circle { cx: from.x, cy: from.y, r: "4", class: "map-origin" }
                circle { cx: to.x, cy: to.y, r: "5", class: "map-destination" }
                circle { cx: here.x, cy: here.y, r: "12", class: "map-current-halo" }
                circle { cx: here.x, cy: here.y, r: "4", class: "map-current" }
                text { x: here.x + 10.0, y: here.y - 10.0, class: "map-label", "ACTIVE TRANSIT" }
            }
            div { class: "map-legend",
                span { class: "legend-origin", "ORIGIN" }
                span { class: "legend-destination", "DESTINATION" }
            }
        }
    }
}
