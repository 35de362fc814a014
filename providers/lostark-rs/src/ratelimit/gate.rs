//! Admission gate for outbound Lost Ark API requests
//!
//! Every request acquires a [`QuotaPermit`] before it is sent and hands the
//! response back through [`QuotaPermit::release`]. Callers that find the
//! window exhausted queue in FIFO order and are woken either when a response
//! frees a slot or when a timer fires shortly after the known window reset.
//!
//! The shared state sits behind a `std::sync::Mutex` that is only held for
//! short bookkeeping steps, never across an `.await`.

use chrono::Utc;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::quota::QuotaState;

/// Default delay past the reported reset before the window is reopened
pub const DEFAULT_RESET_GRACE: Duration = Duration::from_secs(1);

/// Read-only view of the gate's quota bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaSnapshot {
    pub limit: i64,
    pub remaining: i64,
    pub reset_at: Option<i64>,
    pub loaded: bool,
    pub pending: i64,
    /// Callers currently queued for admission
    pub waiting: usize,
}

/// FIFO admission gate driven by the server's rate-limit headers
///
/// Cloning is cheap; all clones share one quota window.
#[derive(Clone)]
pub struct AdmissionGate {
    inner: Arc<GateInner>,
}

struct GateInner {
    state: Mutex<GateState>,
    reset_grace: Duration,
}

struct GateState {
    quota: QuotaState,
    waiters: VecDeque<oneshot::Sender<()>>,
    reset_task: Option<JoinHandle<()>>,
}

impl AdmissionGate {
    /// Creates a gate with the default one second reset grace period
    pub fn new() -> Self {
        Self::with_reset_grace(DEFAULT_RESET_GRACE)
    }

    /// Creates a gate that reopens the window `reset_grace` after the
    /// reported reset time
    pub fn with_reset_grace(reset_grace: Duration) -> Self {
        Self {
            inner: Arc::new(GateInner {
                state: Mutex::new(GateState {
                    quota: QuotaState::new(),
                    waiters: VecDeque::new(),
                    reset_task: None,
                }),
                reset_grace,
            }),
        }
    }

    /// Waits until the window has room for one more request
    ///
    /// Never fails. Dropping the returned future while it is queued gives up
    /// the place in the queue without claiming a slot.
    pub async fn acquire(&self) -> QuotaPermit {
        let mut requeue_front = false;

        loop {
            let rx = {
                let mut state = self.inner.lock();

                if state.quota.is_expired(Utc::now().timestamp()) {
                    debug!(reset_at = ?state.quota.reset_at(), "Rate limit window expired, resetting");
                    state.quota.reset();
                } else if state.quota.remaining() == 0
                    && state.quota.pending() == 0
                    && state.quota.reset_at().is_none()
                {
                    // No response reported a reset time and none is in flight to
                    // report one (exhausted window without reset header, failed request)
                    debug!("Empty window with nothing in flight, reopening");
                    state.quota.reset();
                }

                if state.quota.try_admit() {
                    debug!(
                        remaining = state.quota.remaining(),
                        pending = state.quota.pending(),
                        "Request admitted"
                    );
                    return QuotaPermit {
                        inner: Some(Arc::clone(&self.inner)),
                    };
                }

                let (tx, rx) = oneshot::channel();
                state.waiters.retain(|waiter| !waiter.is_closed());
                // A woken caller that lost its slot keeps its place at the head.
                if requeue_front {
                    state.waiters.push_front(tx);
                } else {
                    state.waiters.push_back(tx);
                }
                debug!(waiting = state.waiters.len(), "Rate limit reached, request queued");
                rx
            };

            QueuedWaiter {
                inner: &self.inner,
                rx: Some(rx),
            }
            .wait()
            .await;

            requeue_front = true;
        }
    }

    /// Returns the current quota bookkeeping
    pub fn snapshot(&self) -> QuotaSnapshot {
        let state = self.inner.lock();
        QuotaSnapshot {
            limit: state.quota.limit(),
            remaining: state.quota.remaining(),
            reset_at: state.quota.reset_at(),
            loaded: state.quota.is_loaded(),
            pending: state.quota.pending(),
            waiting: state.waiters.iter().filter(|tx| !tx.is_closed()).count(),
        }
    }
}

impl Default for AdmissionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AdmissionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdmissionGate")
            .field("quota", &self.snapshot())
            .field("reset_grace", &self.inner.reset_grace)
            .finish()
    }
}

/// One admitted request
///
/// Call [`release`](Self::release) with the response. A permit dropped
/// without a response (transport error, cancelled caller) still gives its
/// slot back, just without a quota observation.
#[must_use = "dropping a permit immediately releases its slot"]
pub struct QuotaPermit {
    inner: Option<Arc<GateInner>>,
}

impl QuotaPermit {
    /// Feeds the response back into the quota window and frees the slot
    pub fn release(mut self, status: StatusCode, headers: &HeaderMap) {
        if let Some(inner) = self.inner.take() {
            inner.release(Some((status, headers)));
        }
    }
}

impl Drop for QuotaPermit {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.take() {
            inner.release(None);
        }
    }
}

impl std::fmt::Debug for QuotaPermit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuotaPermit")
            .field("released", &self.inner.is_none())
            .finish()
    }
}

/// A queued caller's end of the wake-up signal
struct QueuedWaiter<'a> {
    inner: &'a Arc<GateInner>,
    rx: Option<oneshot::Receiver<()>>,
}

impl QueuedWaiter<'_> {
    async fn wait(mut self) {
        if let Some(rx) = self.rx.as_mut() {
            // Err only if the sender vanished, which just means re-check.
            let _ = rx.await;
        }
        self.rx = None;
    }
}

impl Drop for QueuedWaiter<'_> {
    fn drop(&mut self) {
        let Some(mut rx) = self.rx.take() else {
            return;
        };

        rx.close();
        if rx.try_recv().is_ok() {
            // Signalled but cancelled before it could run: hand the wake on.
            let mut state = self.inner.lock();
            wake(&mut state.waiters, 1);
        }
    }
}

impl GateInner {
    fn lock(&self) -> MutexGuard<'_, GateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn release(self: Arc<Self>, outcome: Option<(StatusCode, &HeaderMap)>) {
        let mut state = self.lock();

        state.quota.complete();
        if let Some((status, headers)) = outcome {
            state.quota.observe(status, headers, Utc::now().timestamp());
        }

        let remaining = state.quota.remaining();
        let pending = state.quota.pending();
        let timer_idle = state
            .reset_task
            .as_ref()
            .map_or(true, |task| task.is_finished());

        if timer_idle && remaining <= pending {
            self.schedule_reset(&mut state);
        } else {
            wake(&mut state.waiters, remaining - pending);
        }
    }

    fn schedule_reset(self: &Arc<Self>, state: &mut GateState) {
        let Some(reset_at) = state.quota.reset_at() else {
            // No known reset time: never act on a timer. This covers every
            // response without a reset header. With nothing in flight no
            // response can correct the window either, so reopen it.
            if state.quota.pending() == 0 && !state.waiters.is_empty() {
                debug!("No reset time reported and nothing in flight, reopening window");
                state.quota.reset();
                let remaining = state.quota.remaining();
                wake(&mut state.waiters, remaining);
            }
            return;
        };

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                warn!("No async runtime available, rate limit reset not scheduled");
                return;
            }
        };

        let now_ms = Utc::now().timestamp_millis();
        let until_reset_ms = reset_at.saturating_mul(1000).saturating_sub(now_ms).max(0);
        let until_reset = Duration::from_millis(until_reset_ms as u64);
        let delay = until_reset + self.reset_grace;

        debug!(reset_at, delay_ms = delay.as_millis() as u64, "Scheduling rate limit reset");

        let gate = Arc::downgrade(self);
        state.reset_task = Some(runtime.spawn(run_reset(gate, delay)));
    }
}

impl Drop for GateInner {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = state.reset_task.take() {
            task.abort();
        }
    }
}

/// Timer body: reopen the window after the reported reset plus grace
async fn run_reset(gate: Weak<GateInner>, delay: Duration) {
    tokio::time::sleep(delay).await;

    let Some(inner) = gate.upgrade() else {
        return;
    };

    let mut state = inner.lock();
    state.quota.reset();
    state.reset_task = None;

    let remaining = state.quota.remaining();
    debug!(remaining, waiting = state.waiters.len(), "Rate limit window reset");
    wake(&mut state.waiters, remaining);
}

/// Signals up to `count` waiters from the front of the queue
///
/// Waiters whose caller already gave up are discarded without counting.
fn wake(waiters: &mut VecDeque<oneshot::Sender<()>>, count: i64) {
    let mut woken = 0;

    while woken < count {
        let Some(tx) = waiters.pop_front() else {
            break;
        };
        if tx.send(()).is_ok() {
            woken += 1;
        }
    }
}
