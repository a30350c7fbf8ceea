//! Shared fetch state for the metric views.
//!
//! All four data views follow the same two-tier reactivity: snapshot,
//! population, and grouping property changes re-issue the network request;
//! filter-only parameters (year range, label search) re-derive from the
//! payload already held, with no loading flicker.
//!
//! Every request carries a monotonically increasing sequence number. A
//! response that resolves after a newer request was issued is discarded, so
//! "last request wins" is deterministic regardless of network timing.

use dioxus::prelude::*;
use tracing::{debug, warn};

use super::api::ApiClient;
use super::model::{GapPayload, MetricQuery, Population, PropertyField, Snapshot};

/// The snapshot list, fetched once by the shell and shared read-only with
/// every view through context. `None` until the startup fetch resolves.
#[derive(Clone, Copy)]
pub struct SharedSnapshots(pub Signal<Option<Vec<Snapshot>>>);

/// Signals owned by one view's fetch lifecycle. `Loading` and `Errored` can
/// coexist with a previously held payload: a failed refetch leaves the old
/// data untouched behind the error banner.
#[derive(Clone, Copy)]
pub struct GapMetrics {
    pub payload: Signal<Option<GapPayload>>,
    pub loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

/// Monotonic tags for in-flight requests. Only the most recently issued tag
/// is current; a response carrying any older tag is superseded and must be
/// dropped without touching view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    /// Tag for a request about to be sent.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether a response tagged `issued` has been overtaken by a newer
    /// request.
    pub fn is_superseded(self, issued: u64) -> bool {
        issued != self.latest
    }
}

/// Fetch gap metrics whenever a query-affecting signal changes. The
/// [`ApiClient`] comes from context; the shell provides it once at the root.
pub fn use_gap_metrics(
    snapshot: Signal<String>,
    population: Signal<Population>,
    property: Signal<PropertyField>,
) -> GapMetrics {
    let client = use_context::<ApiClient>();
    let mut payload = use_signal(|| None::<GapPayload>);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut sequence = use_signal(RequestSequence::default);

    use_effect(move || {
        // Reading these signals subscribes the effect to query-affecting
        // parameters only.
        let query = MetricQuery::gender_gap(snapshot(), population(), property());

        let issued = sequence.write().issue();
        loading.set(true);

        let client = client.clone();
        spawn(async move {
            let result = client.gap_metrics(&query).await;

            if sequence.peek().is_superseded(issued) {
                debug!(issued, "discarding superseded metrics response");
                return;
            }

            match result {
                Ok(data) => {
                    payload.set(Some(data));
                    error.set(None);
                }
                Err(err) => {
                    warn!(%err, "metrics fetch failed");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    });

    GapMetrics {
        payload,
        loading,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_increase_monotonically() {
        let mut sequence = RequestSequence::default();
        assert_eq!(sequence.issue(), 1);
        assert_eq!(sequence.issue(), 2);
        assert_eq!(sequence.issue(), 3);
    }

    #[test]
    fn only_the_latest_issued_request_is_current() {
        let mut sequence = RequestSequence::default();

        let first = sequence.issue();
        assert!(!sequence.is_superseded(first));

        // Re-issuing (a population or snapshot change) retires the first
        // request even though its response has not arrived yet.
        let second = sequence.issue();
        assert!(sequence.is_superseded(first));
        assert!(!sequence.is_superseded(second));
    }

    #[test]
    fn responses_arriving_out_of_order_keep_the_last_request() {
        let mut sequence = RequestSequence::default();
        let slow = sequence.issue();
        let fast = sequence.issue();

        // The second request's response lands first and is accepted; the
        // first resolves afterwards and is dropped.
        assert!(!sequence.is_superseded(fast));
        assert!(sequence.is_superseded(slow));
    }
}
