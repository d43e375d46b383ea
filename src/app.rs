use std::{sync::Arc, time::Instant};

use dioxus::{prelude::*, signals::Signal};
use tracing::{debug, info, warn};

use crate::{
    domain::{
        convention_notice, normalize_tracking_input, LookupOutcome, RequestId, TrackingState,
    },
    infra::{into_outcome, TrackingSource},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::TrackingPage,
        shell::Shell,
    },
    util::assets,
};

/// Tracking source shared with every component through context.
#[derive(Clone)]
pub struct SharedSource(pub Arc<dyn TrackingSource>);

#[component]
pub fn App() -> Element {
    let tracking = use_signal(TrackingState::default);
    use_context_provider(|| tracking);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Shell { TrackingPage {} }
        Toast {}
    }
}

/// Runs the gate on the current query and, if it passes, starts a lookup.
/// Returns false when the input was rejected and nothing was sent.
pub fn submit_tracking_query(
    mut tracking: Signal<TrackingState>,
    toasts: Signal<Vec<ToastMessage>>,
    source: SharedSource,
) -> bool {
    let raw = tracking.with(|st| st.query.clone());
    let tracking_id = match normalize_tracking_input(&raw) {
        Ok(id) => id,
        Err(reason) => {
            debug!(%reason, "tracking input rejected");
            return false;
        }
    };
    if let Some(notice) = convention_notice(&tracking_id) {
        debug!(tracking_id, "identifier does not follow the BRG-XXXXXX convention");
        push_toast(toasts, ToastKind::Info, notice);
    }

    let request = tracking.with_mut(|st| {
        st.query = tracking_id.clone();
        st.begin()
    });

    spawn(async move {
        run_lookup(tracking, toasts, source, tracking_id, request).await;
    });
    true
}

async fn run_lookup(
    mut tracking: Signal<TrackingState>,
    toasts: Signal<Vec<ToastMessage>>,
    source: SharedSource,
    tracking_id: String,
    request: RequestId,
) {
    let source_name = source.0.name();
    info!(request_id = %request, source = source_name, tracking_id, "tracking lookup started");

    let started = Instant::now();
    let outcome = into_outcome(source.0.lookup(&tracking_id).await);
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let failure = match &outcome {
        LookupOutcome::Failed(cause) => Some(cause.clone()),
        _ => None,
    };
    let found = matches!(outcome, LookupOutcome::Found(_));

    let applied = tracking.with_mut(|st| st.resolve(request, outcome));
    if !applied {
        let active = tracking.with(|st| st.active_request());
        debug!(
            request_id = %request,
            active_request = ?active,
            tracking_id,
            "dropping answer for superseded lookup"
        );
        return;
    }

    match failure {
        Some(cause) => {
            warn!(
                request_id = %request,
                source = source_name,
                tracking_id,
                elapsed_ms,
                %cause,
                "tracking lookup failed"
            );
            push_toast(
                toasts,
                ToastKind::Error,
                format!("Tracking lookup failed: {cause}"),
            );
        }
        None => info!(request_id = %request, tracking_id, found, elapsed_ms, "tracking lookup finished"),
    }
}
