//! Repeat stream state machine

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use openpedal_calibration::{ControlState, PedalDirection};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::repeat_interval;

/// Editor integration boundary driven by the repeat controller.
///
/// Implementations dispatch to the host editor. Calls arrive from timer
/// tasks as well as the control loop, so implementations must be cheap and
/// non-blocking; a slow editor command must not stall sample processing.
pub trait ActionInvoker: Send + Sync {
    /// Whether the editor can accept suggestions at a finer granularity
    /// than whole suggestions. Queried once per session at controller
    /// construction, never per tick.
    fn supports_fine_grained_accept(&self) -> bool;

    /// Accept one fine-grained unit of the pending suggestion. A `false`
    /// return means no finer-grained accept was available and engages the
    /// session-sticky fallback.
    fn try_fine_grained_accept(&self) -> bool;

    /// Accept the entire pending suggestion in one step.
    fn commit_full_suggestion(&self);

    /// Dismiss the pending suggestion without accepting it.
    fn dismiss_suggestion(&self);

    /// Delete one unit (a single delete keystroke).
    fn delete_one_unit(&self);
}

struct ActiveRepeat {
    period: Duration,
    handle: JoinHandle<()>,
}

/// Drives the accept/delete repeat streams from derived control states.
///
/// Owns the single active repeat timer. Accept and delete are mutually
/// exclusive: starting one direction cancels the other before the first
/// tick can fire. The "which timer is active" state is mutated only through
/// [`apply`](Self::apply) and [`cancel`](Self::cancel).
///
/// Must be used from within a tokio runtime; timer ticks ride spawned
/// tasks that are aborted deterministically on direction change, on return
/// to idle, and on drop.
pub struct RepeatController {
    invoker: Arc<dyn ActionInvoker>,
    direction: PedalDirection,
    active: Option<ActiveRepeat>,
    fine_accept: Arc<AtomicBool>,
    fallback_notice: Arc<AtomicBool>,
}

impl RepeatController {
    /// Negotiates fine-grained accept capability once for the session.
    pub fn new(invoker: Arc<dyn ActionInvoker>) -> Self {
        let fine_accept = invoker.supports_fine_grained_accept();
        if !fine_accept {
            info!("editor lacks fine-grained accept; suggestions will commit whole");
        }

        Self {
            invoker,
            direction: PedalDirection::Idle,
            active: None,
            fine_accept: Arc::new(AtomicBool::new(fine_accept)),
            fallback_notice: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Apply a newly derived control state.
    ///
    /// Zero intensity is idle regardless of direction. Entering a direction
    /// cancels the opposite stream first; staying in a direction restarts
    /// the timer only when the computed interval actually changed, so
    /// per-sample noise on the intensity does not churn the timer.
    pub fn apply(&mut self, state: ControlState) {
        if state.intensity == 0 || state.direction == PedalDirection::Idle {
            self.cancel();
            return;
        }

        let direction = state.direction;
        let entering = self.direction != direction;
        if entering {
            self.cancel_timer();
            debug!(?direction, intensity = state.intensity, "repeat stream starting");
            if direction == PedalDirection::Deleting {
                self.invoker.dismiss_suggestion();
            }
        }
        self.direction = direction;

        if direction == PedalDirection::Accepting && !self.fine_accept.load(Ordering::Acquire) {
            // Sticky fallback: one coarse commit per entry into the accept
            // direction, no repeat timer.
            self.cancel_timer();
            if entering {
                self.invoker.commit_full_suggestion();
            }
            return;
        }

        let period = repeat_interval(state.intensity);
        let restart = match &self.active {
            Some(active) => active.period != period,
            None => true,
        };
        if restart {
            // Only a fresh press fires immediately; an interval change on a
            // held pedal waits one full new period to avoid duplicate
            // actions on restart.
            let immediate = self.active.is_none();
            self.cancel_timer();
            self.start_timer(direction, period, immediate);
        }
    }

    /// Cancel any active stream and return to idle.
    pub fn cancel(&mut self) {
        if self.direction != PedalDirection::Idle {
            debug!(direction = ?self.direction, "repeat stream stopped");
        }
        self.direction = PedalDirection::Idle;
        self.cancel_timer();
    }

    /// Current logical direction of the controller.
    pub fn direction(&self) -> PedalDirection {
        self.direction
    }

    /// Whether a repeat timer is currently live.
    pub fn has_active_timer(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| !active.handle.is_finished())
    }

    /// Whether fine-grained accept is still in use this session.
    pub fn fine_grained_available(&self) -> bool {
        self.fine_accept.load(Ordering::Acquire)
    }

    /// True exactly once after the sticky fallback engages; consumed by the
    /// orchestrator to surface the one-time user notice.
    pub fn fallback_just_engaged(&self) -> bool {
        self.fallback_notice.swap(false, Ordering::AcqRel)
    }

    fn cancel_timer(&mut self) {
        if let Some(active) = self.active.take() {
            active.handle.abort();
        }
    }

    fn start_timer(&mut self, direction: PedalDirection, period: Duration, immediate: bool) {
        let invoker = Arc::clone(&self.invoker);
        let fine_accept = Arc::clone(&self.fine_accept);
        let fallback_notice = Arc::clone(&self.fallback_notice);

        let handle = tokio::spawn(async move {
            let start = if immediate {
                tokio::time::Instant::now()
            } else {
                tokio::time::Instant::now() + period
            };
            let mut ticker = tokio::time::interval_at(start, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                match direction {
                    PedalDirection::Accepting => {
                        if invoker.try_fine_grained_accept() {
                            continue;
                        }
                        fine_accept.store(false, Ordering::Release);
                        fallback_notice.store(true, Ordering::Release);
                        invoker.commit_full_suggestion();
                        warn!(
                            "no fine-grained accept available; committed the full suggestion \
                             and falling back for the rest of the session"
                        );
                        break;
                    }
                    PedalDirection::Deleting => invoker.delete_one_unit(),
                    PedalDirection::Idle => break,
                }
            }
        });

        self.active = Some(ActiveRepeat { period, handle });
    }
}

impl Drop for RepeatController {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
