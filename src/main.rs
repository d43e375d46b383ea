#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::{
    app::SharedSource,
    infra::{StaticShipmentStore, TrackingSource},
    util::{
        config::AppConfig,
        version::{version_label, APP_NAME},
    },
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    info!(version = %version_label(), "starting {APP_NAME}");

    let config = AppConfig::from_env().unwrap_or_else(|err| {
        warn!(error = %err, "invalid tracking configuration, using defaults");
        AppConfig::default()
    });

    let source: Arc<dyn TrackingSource> = config.tracking_source().unwrap_or_else(|err| {
        warn!(error = %err, "tracking endpoint unusable, serving fixture shipments");
        Arc::new(StaticShipmentStore::new().with_latency(config.fixture_latency))
    });

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder
        .with_context(SharedSource(source))
        .launch(app::App);
}
