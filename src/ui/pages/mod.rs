pub mod tracking;

pub use tracking::TrackingPage;
