use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    rsx! {
        div { class: "shell",
            header { class: "shell-header",
                div { class: "brand",
                    span { class: "brand-mark", "BG7" }
                    div {
                        h1 { class: "brand-name", "BRIGHT G-7" }
                        p { class: "brand-sub", "Logistics Ltd" }
                    }
                }
                nav { class: "shell-nav",
                    a { href: "#tracking", class: "nav-link nav-active", "Track Shipment" }
                }
            }
            main { class: "shell-main",
                {children}
            }
            footer { class: "shell-footer",
                span { "{APP_NAME}" }
                span { class: "muted", "{version_label()}" }
            }
        }
    }
}
