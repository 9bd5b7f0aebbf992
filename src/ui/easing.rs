//! Display-side easing of the content offset.
//!
//! While a pull is live the page tracks the published offset exactly.  Once
//! the engine reports the content settled, whatever gap remains between the
//! drawn offset and the target closes with an exponential ease-out rather
//! than a jump.

use crate::core::Transition;

/// Gaps smaller than this (in pull units) close immediately.
const SNAP: f64 = 0.4;

/// Drawn-offset tracker.
#[derive(Debug, Clone)]
pub struct OffsetEase {
    shown: f64,
    /// Fraction of the remaining gap closed per frame.  Higher = faster
    /// settle.  Good range: 0.2–0.45 at 60 fps.
    speed: f64,
}

impl Default for OffsetEase {
    fn default() -> Self {
        Self::new(0.3)
    }
}

impl OffsetEase {
    pub fn new(speed: f64) -> Self {
        Self {
            shown: 0.0,
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// Apply a freshly drawn target without advancing the ease.
    pub fn sync(&mut self, target: f64, transition: Transition) {
        if transition == Transition::Immediate {
            self.shown = target;
        }
    }

    /// Advance one frame toward `target`.
    pub fn tick(&mut self, target: f64, transition: Transition) {
        match transition {
            Transition::Immediate => self.shown = target,
            Transition::Eased => {
                self.shown += (target - self.shown) * self.speed;
                if (target - self.shown).abs() < SNAP {
                    self.shown = target;
                }
            }
        }
    }

    /// Drawn offset in whole terminal rows.
    pub fn rows(&self, px_per_row: f64) -> i32 {
        (self.shown / px_per_row).round() as i32
    }

    pub fn is_animating(&self, target: f64) -> bool {
        self.shown != target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_tracks_exactly() {
        let mut e = OffsetEase::default();
        e.sync(120.0, Transition::Immediate);
        assert_eq!(e.shown, 120.0);
        e.tick(-40.0, Transition::Immediate);
        assert_eq!(e.shown, -40.0);
    }

    #[test]
    fn eased_closes_gap_monotonically() {
        let mut e = OffsetEase::new(0.3);
        e.sync(40.0, Transition::Immediate);
        e.sync(0.0, Transition::Eased);
        assert_eq!(e.shown, 40.0);

        let mut last = e.shown;
        let mut frames = 0;
        while e.is_animating(0.0) {
            e.tick(0.0, Transition::Eased);
            assert!(e.shown < last);
            last = e.shown;
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(e.shown, 0.0);
    }

    #[test]
    fn rows_rounds_to_nearest() {
        let mut e = OffsetEase::default();
        e.sync(33.3, Transition::Immediate);
        assert_eq!(e.rows(16.0), 2);
        e.sync(-25.0, Transition::Immediate);
        assert_eq!(e.rows(16.0), -2);
    }
}
