//! Return-to-rest animation: geometric decay of the pull distance.
//!
//! Two states.  `Idle` holds no frame request; `Relaxing` holds exactly one.
//! Each frame the distance is multiplied by the decay rate until it drops
//! below [`REST_THRESHOLD`], at which point it snaps to zero and the animator
//! goes idle.  A gesture in progress pre-empts the frame before it writes.

/// Below this magnitude the decay stops and the distance snaps to zero.
pub const REST_THRESHOLD: f64 = 2.0;

/// Identifies an outstanding animation-frame request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimatorState {
    #[default]
    Idle,
    Relaxing(FrameHandle),
}

/// Outcome of one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// A gesture started; nothing was written and the animator is idle.
    Preempted,
    /// The distance reached rest; write zero.  The animator is idle.
    Settled,
    /// Write the decayed distance; the next frame is already requested.
    Decayed(f64),
}

#[derive(Debug, Default)]
pub struct ReturnAnimator {
    state: AnimatorState,
    requested: u64,
}

impl ReturnAnimator {
    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_relaxing(&self) -> bool {
        matches!(self.state, AnimatorState::Relaxing(_))
    }

    /// Begin relaxing from `distance`.  Any outstanding request is cancelled
    /// first; nothing is requested when already at rest.
    pub fn start(&mut self, distance: f64) -> Option<FrameHandle> {
        self.cancel();
        if distance == 0.0 {
            return None;
        }
        Some(self.request_frame())
    }

    /// Drop the outstanding frame request, if any.
    pub fn cancel(&mut self) -> Option<FrameHandle> {
        match std::mem::take(&mut self.state) {
            AnimatorState::Relaxing(handle) => Some(handle),
            AnimatorState::Idle => None,
        }
    }

    /// Run one frame.  Returns `None` when no frame was requested.
    pub fn step(&mut self, distance: f64, interacting: bool, decay_rate: f64) -> Option<Step> {
        if !self.is_relaxing() {
            return None;
        }
        if interacting {
            self.cancel();
            return Some(Step::Preempted);
        }
        match decay_step(distance, decay_rate) {
            Some(next) => {
                self.request_frame();
                Some(Step::Decayed(next))
            }
            None => {
                self.cancel();
                Some(Step::Settled)
            }
        }
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.requested += 1;
        let handle = FrameHandle(self.requested);
        self.state = AnimatorState::Relaxing(handle);
        handle
    }
}

/// One decay step: `None` once `distance` is within the rest threshold,
/// otherwise the shrunken distance.  Never changes sign for `rate ∈ (0, 1)`.
pub fn decay_step(distance: f64, rate: f64) -> Option<f64> {
    if distance.abs() < REST_THRESHOLD {
        None
    } else {
        Some(distance * rate)
    }
}

/// Upper bound on the number of decay multiplications needed to bring `d0`
/// under the rest threshold: `⌈ln(2/|d0|) / ln(rate)⌉`.  The animator then
/// spends one more frame snapping to zero.
pub fn decay_steps_bound(d0: f64, rate: f64) -> u32 {
    let d0 = d0.abs();
    if d0 < REST_THRESHOLD {
        return 0;
    }
    let steps = ((REST_THRESHOLD / d0).ln() / rate.ln()).ceil();
    // Exactly on the threshold after `steps` multiplications still needs one more.
    if d0 * rate.powf(steps) >= REST_THRESHOLD {
        steps as u32 + 1
    } else {
        steps as u32
    }
}
