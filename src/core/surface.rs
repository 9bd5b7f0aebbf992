//! What the page layers should look like for a given pull.

/// Overlay opacity with the page at rest.
pub const OVERLAY_OPACITY_REST: f64 = 0.85;
/// The overlay never fades below this, however far the page is pulled.
pub const OVERLAY_OPACITY_FLOOR: f64 = 0.3;

/// Whether offset changes should be eased or applied as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Track the published offset exactly (pull or decay in progress).
    Immediate,
    /// Ease into place (content fully settled).
    Eased,
}

/// Derived presentation for the fixed header/footer/background layers and
/// the scrollable content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyle {
    /// Vertical translation of the content layer, in the same units as the
    /// pull distance.  Also handed to the header and footer.
    pub offset: f64,
    /// Opacity of the dimming overlay, in `[0.3, 0.85]`.
    pub overlay_opacity: f64,
    pub transition: Transition,
}

impl SurfaceStyle {
    pub fn compute(throttled: f64, raw: f64, interacting: bool, max_pull_distance: f64) -> Self {
        let overlay_opacity = (OVERLAY_OPACITY_REST - throttled.abs() / max_pull_distance)
            .max(OVERLAY_OPACITY_FLOOR);
        let transition = if raw == 0.0 && !interacting {
            Transition::Eased
        } else {
            Transition::Immediate
        };
        Self {
            offset: throttled,
            overlay_opacity,
            transition,
        }
    }

    pub fn at_rest() -> Self {
        Self {
            offset: 0.0,
            overlay_opacity: OVERLAY_OPACITY_REST,
            transition: Transition::Eased,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_fades_with_pull_and_floors() {
        let s = SurfaceStyle::compute(0.0, 0.0, false, 300.0);
        assert_eq!(s, SurfaceStyle::at_rest());

        let s = SurfaceStyle::compute(-150.0, -150.0, true, 300.0);
        assert!((s.overlay_opacity - 0.35).abs() < 1e-9);
        assert_eq!(s.offset, -150.0);

        let s = SurfaceStyle::compute(300.0, 300.0, true, 300.0);
        assert_eq!(s.overlay_opacity, OVERLAY_OPACITY_FLOOR);
    }

    #[test]
    fn easing_only_when_fully_settled() {
        assert_eq!(
            SurfaceStyle::compute(0.0, 0.0, true, 300.0).transition,
            Transition::Immediate
        );
        assert_eq!(
            SurfaceStyle::compute(0.0, 12.0, false, 300.0).transition,
            Transition::Immediate
        );
        // The published copy may lag; only the raw value gates easing.
        assert_eq!(
            SurfaceStyle::compute(1.9, 0.0, false, 300.0).transition,
            Transition::Eased
        );
    }
}
