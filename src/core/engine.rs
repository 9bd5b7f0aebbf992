//! The overscroll engine: one owner for every piece of pull state.
//!
//! Input handlers, timer expiry ([`OverscrollEngine::advance`]) and animation
//! frames ([`OverscrollEngine::on_frame`]) all go through `&mut self`, so they
//! are serialized by whoever owns the engine.  Ownership of the raw distance
//! moves one way at a time: the input channels write it while a gesture is
//! active, the return animator writes it while relaxing, and the animator
//! checks the interaction flag before every write so a new gesture always
//! wins.
//!
//! Timestamps are `Duration`s since an epoch chosen by the host.

use std::time::Duration;

use super::animator::{self, AnimatorState, ReturnAnimator, Step};
use super::boundary::{Boundary, Viewport};
use super::config::PullConfig;
use super::sampler::{self, Disposition, InputSampler};
use super::surface::SurfaceStyle;
use super::throttle::ThrottledPublisher;
use super::timer::Timer;

/// Quiet period after the last wheel impulse before the gesture is over.
pub const SETTLE_DELAY: Duration = Duration::from_millis(120);

#[derive(Debug)]
pub struct OverscrollEngine {
    config: PullConfig,
    raw_distance: f64,
    interacting: bool,
    sampler: InputSampler,
    animator: ReturnAnimator,
    publisher: ThrottledPublisher,
    settle: Timer,
    mounted: bool,
}

impl OverscrollEngine {
    pub fn mount(config: PullConfig) -> Self {
        tracing::debug!(
            max = config.max_pull_distance(),
            damping = config.damping_factor(),
            decay = config.decay_rate(),
            "overscroll engine mounted"
        );
        Self {
            config,
            raw_distance: 0.0,
            interacting: false,
            sampler: InputSampler::default(),
            animator: ReturnAnimator::default(),
            publisher: ThrottledPublisher::default(),
            settle: Timer::default(),
            mounted: true,
        }
    }

    /// Cancel every pending timer and frame request.  All later calls are
    /// no-ops.
    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.settle.cancel();
        self.publisher.cancel();
        self.animator.cancel();
        self.sampler.touch_end();
        self.interacting = false;
        self.mounted = false;
        tracing::debug!("overscroll engine unmounted");
    }

    // ── input ──────────────────────────────────────────────────

    pub fn on_wheel<V: Viewport + ?Sized>(
        &mut self,
        now: Duration,
        delta_y: f64,
        viewport: &V,
    ) -> Disposition {
        if !self.mounted {
            return Disposition::PassThrough;
        }
        let Some(boundary) = Boundary::query(viewport) else {
            return Disposition::PassThrough;
        };
        let Some(next) = sampler::wheel_pull(self.raw_distance, delta_y, boundary, &self.config)
        else {
            return Disposition::PassThrough;
        };

        if !self.interacting {
            tracing::trace!(delta_y, "wheel gesture started");
        }
        self.interacting = true;
        self.set_raw(next, now);
        // A held touch owns the gesture; only touch end may release it.
        if !self.sampler.is_touching() {
            self.settle.arm(now, SETTLE_DELAY);
        }
        Disposition::Consumed
    }

    pub fn on_touch_start(&mut self, _now: Duration, y: f64) {
        if !self.mounted {
            return;
        }
        if self.animator.cancel().is_some() {
            tracing::trace!("touch start cancelled return animation");
        }
        // The touch gesture owns the pull now; a wheel settle must not end it.
        self.settle.cancel();
        self.interacting = true;
        self.sampler.touch_start(y);
    }

    pub fn on_touch_move<V: Viewport + ?Sized>(
        &mut self,
        now: Duration,
        y: f64,
        viewport: &V,
    ) -> Disposition {
        if !self.mounted || !self.sampler.is_touching() {
            return Disposition::PassThrough;
        }
        if !self.sampler.admit_touch_move() {
            return Disposition::PassThrough;
        }
        let Some(boundary) = Boundary::query(viewport) else {
            return Disposition::PassThrough;
        };
        match self
            .sampler
            .touch_move(self.raw_distance, y, boundary, &self.config)
        {
            Some(next) => {
                self.set_raw(next, now);
                Disposition::Consumed
            }
            None => Disposition::PassThrough,
        }
    }

    pub fn on_touch_end(&mut self, _now: Duration) {
        if !self.mounted {
            return;
        }
        self.sampler.touch_end();
        self.interacting = false;
        self.start_return();
    }

    // ── scheduling ─────────────────────────────────────────────

    /// Fire every timer due at `now`, earliest first (settle wins ties).
    /// Returns `true` if the render surface received a new value.
    pub fn advance(&mut self, now: Duration) -> bool {
        if !self.mounted {
            return false;
        }
        let mut published = false;
        loop {
            let settle = self.settle.deadline().filter(|d| *d <= now);
            let throttle = self.publisher.deadline().filter(|d| *d <= now);
            match (settle, throttle) {
                (Some(s), Some(t)) if s <= t => self.fire_settle(now),
                (Some(_), None) => self.fire_settle(now),
                (_, Some(_)) => {
                    if self.publisher.fire_if_due(now, self.raw_distance) {
                        tracing::trace!(distance = self.raw_distance, "published");
                        published = true;
                    }
                }
                (None, None) => break,
            }
        }
        published
    }

    /// Run one animation frame.  Returns `true` if the raw distance changed.
    pub fn on_frame(&mut self, now: Duration) -> bool {
        if !self.mounted {
            return false;
        }
        let Some(step) = self.animator.step(
            self.raw_distance,
            self.interacting,
            self.config.decay_rate(),
        ) else {
            return false;
        };
        match step {
            Step::Preempted => {
                tracing::trace!(distance = self.raw_distance, "return animation preempted");
                false
            }
            Step::Settled => {
                tracing::debug!("pull settled");
                self.set_raw(0.0, now)
            }
            Step::Decayed(next) => self.set_raw(next, now),
        }
    }

    /// Earliest pending timer deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.settle.deadline(), self.publisher.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// True while an animation frame is requested.
    pub fn wants_frame(&self) -> bool {
        self.mounted && self.animator.is_relaxing()
    }

    // ── observation ────────────────────────────────────────────

    /// Presentation for the current pull.  An unmounted engine reports the
    /// page at rest.
    pub fn surface(&self) -> SurfaceStyle {
        if !self.mounted {
            return SurfaceStyle::at_rest();
        }
        SurfaceStyle::compute(
            self.publisher.value(),
            self.raw_distance,
            self.interacting,
            self.config.max_pull_distance(),
        )
    }

    pub fn raw_distance(&self) -> f64 {
        self.raw_distance
    }

    pub fn throttled_distance(&self) -> f64 {
        self.publisher.value()
    }

    pub fn publications(&self) -> u64 {
        self.publisher.publications()
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    pub fn animator_state(&self) -> AnimatorState {
        self.animator.state()
    }

    pub fn config(&self) -> &PullConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // ── internals ──────────────────────────────────────────────

    fn fire_settle(&mut self, _now: Duration) {
        self.settle.cancel();
        if self.sampler.is_touching() {
            return;
        }
        self.interacting = false;
        tracing::trace!("wheel gesture settled");
        self.start_return();
    }

    fn start_return(&mut self) {
        if self.interacting {
            return;
        }
        if self.animator.start(self.raw_distance).is_some() {
            tracing::debug!(
                from = self.raw_distance,
                max_steps = animator::decay_steps_bound(self.raw_distance, self.config.decay_rate()),
                "return animation started"
            );
        }
    }

    fn set_raw(&mut self, value: f64, now: Duration) -> bool {
        if value == self.raw_distance {
            return false;
        }
        self.raw_distance = value;
        self.publisher.schedule(now);
        true
    }
}
