//! Input channels: wheel impulses and touch drags at the viewport edges.
//!
//! Both channels reduce to the same rule: when the input pushes *past* an
//! edge, fold it into the raw pull distance (clamped and snapped) and claim
//! the event; otherwise hand it back to native scrolling untouched.

use super::boundary::Boundary;
use super::config::PullConfig;
use super::policy;

/// Only every n-th touch move is processed; the rest pass straight through.
pub const TOUCH_SAMPLE_STRIDE: u32 = 2;

/// What the host should do with an input event after the engine saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// The engine absorbed the event; suppress native scrolling.
    Consumed,
    /// Let native scrolling handle it.
    PassThrough,
}

impl Disposition {
    pub fn is_consumed(self) -> bool {
        self == Disposition::Consumed
    }
}

/// Per-gesture touch tracking.  Wheel input is stateless, see [`wheel_pull`].
#[derive(Debug, Default)]
pub struct InputSampler {
    /// Vertical position of the last processed touch sample.
    last_touch_y: Option<f64>,
    /// Touch moves seen since touch start (drives subsampling).
    touch_moves: u32,
}

/// New raw distance for a wheel impulse, or `None` if it passes through.
///
/// Scrolling up (`delta_y < 0`) at the top pulls the page down; scrolling
/// down at the bottom pulls it up.
pub fn wheel_pull(raw: f64, delta_y: f64, boundary: Boundary, config: &PullConfig) -> Option<f64> {
    if !delta_y.is_finite() {
        return None;
    }
    let pushes_past_edge =
        (boundary.at_top && delta_y < 0.0) || (boundary.at_bottom && delta_y > 0.0);
    if !pushes_past_edge {
        return None;
    }
    Some(policy::bound(raw - delta_y, config.max_pull_distance()))
}

impl InputSampler {
    pub fn touch_start(&mut self, y: f64) {
        self.last_touch_y = Some(y);
        self.touch_moves = 0;
    }

    /// Returns `true` if this touch move should be processed at all.
    /// Call once per move event, before [`InputSampler::touch_move`].
    pub fn admit_touch_move(&mut self) -> bool {
        let admitted = self.touch_moves % TOUCH_SAMPLE_STRIDE == 0;
        self.touch_moves = self.touch_moves.wrapping_add(1);
        admitted
    }

    /// New raw distance for an admitted touch sample, or `None` if it passes
    /// through.  The reference position advances on every admitted sample.
    pub fn touch_move(
        &mut self,
        raw: f64,
        y: f64,
        boundary: Boundary,
        config: &PullConfig,
    ) -> Option<f64> {
        let last = self.last_touch_y?;
        if !y.is_finite() {
            return None;
        }
        self.last_touch_y = Some(y);

        if !boundary.any() {
            return None;
        }
        let delta_y = y - last;
        let direction = if boundary.at_top { 1.0 } else { -1.0 };
        let pulls_away =
            (boundary.at_top && delta_y > 0.0) || (boundary.at_bottom && delta_y < 0.0);
        if !pulls_away {
            return None;
        }
        let next = raw + (delta_y * direction) / config.damping_factor();
        Some(policy::bound(next, config.max_pull_distance()))
    }

    pub fn touch_end(&mut self) {
        self.last_touch_y = None;
    }

    pub fn is_touching(&self) -> bool {
        self.last_touch_y.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: Boundary = Boundary {
        at_top: true,
        at_bottom: false,
    };
    const BOTTOM: Boundary = Boundary {
        at_top: false,
        at_bottom: true,
    };
    const MIDDLE: Boundary = Boundary {
        at_top: false,
        at_bottom: false,
    };

    #[test]
    fn wheel_up_at_top_pulls_down() {
        let c = PullConfig::default();
        assert_eq!(wheel_pull(0.0, -50.0, TOP, &c), Some(50.0));
    }

    #[test]
    fn wheel_down_at_bottom_pulls_up() {
        let c = PullConfig::default();
        assert_eq!(wheel_pull(0.0, 80.0, BOTTOM, &c), Some(-80.0));
    }

    #[test]
    fn wheel_away_from_edge_passes_through() {
        let c = PullConfig::default();
        assert_eq!(wheel_pull(0.0, 50.0, TOP, &c), None);
        assert_eq!(wheel_pull(0.0, -50.0, BOTTOM, &c), None);
        assert_eq!(wheel_pull(0.0, -50.0, MIDDLE, &c), None);
        assert_eq!(wheel_pull(0.0, 0.0, TOP, &c), None);
        assert_eq!(wheel_pull(0.0, f64::NAN, TOP, &c), None);
    }

    #[test]
    fn wheel_small_impulse_snaps_to_zero() {
        let c = PullConfig::default();
        assert_eq!(wheel_pull(0.0, -3.0, TOP, &c), Some(0.0));
    }

    #[test]
    fn touch_drag_down_at_top_is_damped() {
        let mut s = InputSampler::default();
        let c = PullConfig::default();
        s.touch_start(500.0);
        assert!(s.admit_touch_move());
        let next = s.touch_move(0.0, 540.0, TOP, &c).unwrap();
        assert!((next - 33.333_333).abs() < 1e-3);
    }

    #[test]
    fn touch_drag_up_at_bottom_uses_negative_direction() {
        let mut s = InputSampler::default();
        let c = PullConfig::default();
        s.touch_start(500.0);
        // (-60 * -1) / 1.2 = 50
        assert_eq!(s.touch_move(0.0, 440.0, BOTTOM, &c), Some(50.0));
    }

    #[test]
    fn touch_subsampling_admits_every_other_move() {
        let mut s = InputSampler::default();
        s.touch_start(0.0);
        let admitted: Vec<bool> = (0..5).map(|_| s.admit_touch_move()).collect();
        assert_eq!(admitted, vec![true, false, true, false, true]);

        s.touch_start(0.0);
        assert!(s.admit_touch_move());
    }

    #[test]
    fn touch_reference_advances_even_when_passing_through() {
        let mut s = InputSampler::default();
        let c = PullConfig::default();
        s.touch_start(500.0);
        assert_eq!(s.touch_move(0.0, 520.0, MIDDLE, &c), None);
        // Now at top, only the 12-unit step since the last sample counts.
        assert_eq!(s.touch_move(0.0, 532.0, TOP, &c), Some(10.0));
    }

    #[test]
    fn touch_move_without_start_is_ignored() {
        let mut s = InputSampler::default();
        let c = PullConfig::default();
        assert_eq!(s.touch_move(0.0, 540.0, TOP, &c), None);
        assert!(!s.is_touching());
    }
}
