//! Order lifecycle tracker
//!
//! Owns the client-visible state of a single order and keeps it in sync
//! with the remote order service: a fixed-interval status poll plus a 1 s
//! countdown tick derived from the payment's absolute expiry. One tracker
//! per order; both ticks run on the same cooperative loop, so updates are
//! trivially serialized. The remote system is the only writer of order
//! status — the tracker re-reads it and guards against stale responses.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use shared::models::{OrderStatus, OrderStatusResponse, Payment};
use shared::util::now_millis;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::{ClientResult, HttpClient};

/// Default status poll interval (policy band is 3-5 s)
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(4);
/// Local countdown tick, independent of network polling
const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);

/// Source of order-status observations
///
/// `HttpClient` in production; tests drive the tracker with a scripted
/// implementation.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn order_status(&self, order_id: &str) -> ClientResult<OrderStatusResponse>;
}

#[async_trait]
impl StatusSource for HttpClient {
    async fn order_status(&self, order_id: &str) -> ClientResult<OrderStatusResponse> {
        HttpClient::order_status(self, order_id).await
    }
}

/// Client-visible state of one tracked order
#[derive(Debug, Clone)]
pub struct TrackedOrder {
    pub order_id: String,
    pub ref_id: Option<String>,
    /// Last server-observed status; never moves off a terminal value
    pub status: OrderStatus,
    pub status_label: String,
    pub payment: Option<Payment>,
    /// Seconds until payment expiry, clamped at zero
    pub remaining_seconds: i64,
    /// Countdown reached zero before the server confirmed expiry.
    /// Presentation-only: `status` keeps the last server-observed value.
    pub locally_expired: bool,
    /// Poll failures since the last successful status response
    pub consecutive_failures: u32,
}

/// Tracks one order from creation to terminal state or expiry
pub struct OrderTracker {
    source: Arc<dyn StatusSource>,
    order_id: String,
    poll_interval: Duration,
    shutdown: CancellationToken,
    state: watch::Sender<TrackedOrder>,
    started: AtomicBool,
}

impl OrderTracker {
    /// Create a tracker seeded with the order-creation response.
    pub fn new(
        source: Arc<dyn StatusSource>,
        order_id: impl Into<String>,
        ref_id: Option<String>,
        initial: OrderStatusResponse,
    ) -> Self {
        let order_id = order_id.into();
        let now = now_millis();
        let remaining_seconds = initial
            .payment
            .as_ref()
            .map(|p| p.remaining_seconds(now))
            .unwrap_or(0);

        let (state, _) = watch::channel(TrackedOrder {
            order_id: order_id.clone(),
            ref_id,
            status: initial.status,
            status_label: initial.status_label,
            payment: initial.payment,
            remaining_seconds,
            locally_expired: false,
            consecutive_failures: 0,
        });

        Self {
            source,
            order_id,
            poll_interval: DEFAULT_POLL_INTERVAL,
            shutdown: CancellationToken::new(),
            state,
            started: AtomicBool::new(false),
        }
    }

    /// Override the poll interval (tests and slow endpoints)
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> watch::Receiver<TrackedOrder> {
        self.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn current(&self) -> TrackedOrder {
        self.state.borrow().clone()
    }

    /// Start the poll + countdown loop.
    ///
    /// A tracker runs at most one loop; calling `start` again returns a
    /// completed no-op handle. `stop` called before `start` leaves the
    /// tracker inert: the loop observes the cancelled token and exits on
    /// its first iteration.
    pub fn start(&self) -> JoinHandle<()> {
        if self.started.swap(true, Ordering::SeqCst) {
            tracing::warn!(order_id = %self.order_id, "tracker already started");
            return tokio::spawn(async {});
        }

        let source = Arc::clone(&self.source);
        let order_id = self.order_id.clone();
        let poll_interval = self.poll_interval;
        let shutdown = self.shutdown.clone();
        let state = self.state.clone();

        tokio::spawn(run(source, order_id, poll_interval, shutdown, state))
    }

    /// Cancel the loop. Idempotent; safe before `start`.
    pub fn stop(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for OrderTracker {
    /// A discarded tracker must never fire another timer.
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// The single cooperative loop for one order
async fn run(
    source: Arc<dyn StatusSource>,
    order_id: String,
    poll_interval: Duration,
    shutdown: CancellationToken,
    state: watch::Sender<TrackedOrder>,
) {
    // stop() before start(): stay inert, never touch the seeded state
    if shutdown.is_cancelled() {
        return;
    }

    tracing::debug!(order_id = %order_id, "order tracker started");

    let mut poll = tokio::time::interval(poll_interval);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut countdown = tokio::time::interval(COUNTDOWN_INTERVAL);
    countdown.set_missed_tick_behavior(MissedTickBehavior::Skip);

    'track: loop {
        // biased: cancellation wins over a ready tick, and the countdown's
        // immediate first tick runs before the first poll so a payment that
        // is already past expiry halts without a network round-trip
        tokio::select! {
            biased;

            _ = shutdown.cancelled() => break 'track,

            _ = countdown.tick() => {
                if apply_countdown(&state) {
                    break 'track;
                }
            }

            _ = poll.tick() => {
                // The countdown runs on its own fixed-rate tick, so a slow
                // or hung status request must not block it: race the
                // in-flight response against the countdown and cancellation
                // instead of awaiting it inline.
                let mut request = source.order_status(&order_id);
                loop {
                    tokio::select! {
                        biased;

                        _ = shutdown.cancelled() => break 'track,

                        _ = countdown.tick() => {
                            if apply_countdown(&state) {
                                break 'track;
                            }
                        }

                        result = &mut request => {
                            match result {
                                Ok(response) => {
                                    if apply_status(&state, response) {
                                        break 'track;
                                    }
                                }
                                Err(e) => {
                                    let failures = bump_failures(&state);
                                    tracing::warn!(
                                        order_id = %order_id,
                                        consecutive_failures = failures,
                                        "status poll failed: {e}"
                                    );
                                }
                            }
                            break;
                        }
                    }
                }
            }
        }
    }

    tracing::debug!(order_id = %order_id, "order tracker stopped");
}

/// Apply a status response. Returns true when polling must halt.
///
/// An observation is applied only if it differs from, or refines (fresh
/// payment/label on the same status), the displayed state; a non-terminal
/// observation never overwrites an already-terminal one.
fn apply_status(state: &watch::Sender<TrackedOrder>, response: OrderStatusResponse) -> bool {
    let now = now_millis();
    let mut halt = false;
    state.send_modify(|order| {
        order.consecutive_failures = 0;

        if order.status.is_terminal() {
            halt = true;
            return;
        }

        let changed = response.status != order.status;
        let refines = response.payment.is_some() || response.status_label != order.status_label;
        if changed || refines {
            order.status = response.status;
            order.status_label = response.status_label;
            if let Some(payment) = response.payment {
                order.remaining_seconds = payment.remaining_seconds(now);
                order.payment = Some(payment);
            }
        }

        if order.status.is_terminal() {
            halt = true;
        }
    });
    halt
}

/// Recompute the countdown. Returns true when polling must halt.
///
/// Reaching zero marks the payment locally expired (expired presentation)
/// without touching `status` — the server stays authoritative for that.
fn apply_countdown(state: &watch::Sender<TrackedOrder>) -> bool {
    let now = now_millis();
    let mut halt = false;
    state.send_modify(|order| {
        if order.status.is_terminal() {
            halt = true;
            return;
        }
        let Some(payment) = &order.payment else {
            return;
        };
        order.remaining_seconds = payment.remaining_seconds(now);
        // Expired means the expiry instant has passed, not the last
        // partial second before it
        if payment.expired_at <= now {
            order.locally_expired = true;
            halt = true;
        }
    });
    halt
}

/// Count a failed poll attempt; returns the new consecutive count.
fn bump_failures(state: &watch::Sender<TrackedOrder>) -> u32 {
    let mut failures = 0;
    state.send_modify(|order| {
        order.consecutive_failures += 1;
        failures = order.consecutive_failures;
    });
    failures
}
