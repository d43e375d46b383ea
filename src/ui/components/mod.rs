pub mod event_log;
pub mod progress_bar;
pub mod route_map;
pub mod shipment_summary;
pub mod status_badge;
pub mod toast;
