//! Surface size and the geometric scale derived from it.

use crate::float::Float;

/// Width of the reference box every default length is tuned for.
pub const REFERENCE_WIDTH: f32 = 600.0;
/// Height of the reference box every default length is tuned for.
pub const REFERENCE_HEIGHT: f32 = 640.0;
/// Lengths never shrink below this fraction of their reference value.
pub const MIN_SCALE: f32 = 0.25;
/// Scale changes at or below this are treated as no change.
pub const SCALE_EPSILON: f32 = 1e-6;

/// Size of the simulation surface in simulation units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Surface<F: Float> {
    pub width: F,
    pub height: F,
}

impl<F: Float> Surface<F> {
    pub fn new(width: F, height: F) -> Self {
        Surface { width, height }
    }

    /// The reference surface (600 x 640).
    pub fn reference() -> Self {
        Surface {
            width: F::from_f32(REFERENCE_WIDTH),
            height: F::from_f32(REFERENCE_HEIGHT),
        }
    }

    /// Scale factor for this surface, see [`scale_from_surface`].
    pub fn scale(&self) -> F {
        scale_from_surface(self.width, self.height)
    }
}

/// Fit the reference box inside `width x height`, clamped to [`MIN_SCALE`].
///
/// The smaller axis ratio wins. Non-finite or non-positive sizes fall back to
/// the minimum scale.
pub fn scale_from_surface<F: Float>(width: F, height: F) -> F {
    let sx = width / F::from_f32(REFERENCE_WIDTH);
    let sy = height / F::from_f32(REFERENCE_HEIGHT);
    let floor = F::from_f32(MIN_SCALE);
    if !sx.is_finite() || !sy.is_finite() {
        return floor;
    }
    sx.min(sy).max(floor)
}

/// True when two scale factors differ by more than [`SCALE_EPSILON`].
pub fn scale_changed<F: Float>(previous: F, next: F) -> bool {
    (next - previous).abs() > F::from_f32(SCALE_EPSILON)
}
