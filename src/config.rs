//! Simulation knobs, their scaled form, and the active-config snapshot.

use crate::error::{Result, RosaryError};
use crate::float::Float;
use crate::node::NodeKind;
use crate::scale::Surface;

/// Named numeric knobs for the rosary simulation.
///
/// Lengths are given for the 600 x 640 reference surface and are multiplied
/// by the scale factor when a graph is built (see [`SimConfig::scaled`]).
/// Pointer tolerances and the boundary margin are not scaled.
///
/// # Builder Pattern
/// ```
/// use rosary::config::SimConfig;
///
/// let config: SimConfig<f32> = SimConfig::new()
///     .with_iterations(8)
///     .with_gravity(900.0)
///     .with_stiffness(0.7)
///     .with_collision(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig<F: Float> {
    /// Relaxation iterations per step. Default: 12.
    pub iterations: usize,
    /// Downward acceleration in units/s^2. Default: 1200.
    pub gravity: F,
    /// Multiplier on implied velocity each step. Default: 0.12.
    pub damping: F,
    /// Fraction of each link's error corrected per pass, in [0, 1]. Default: 0.5.
    pub stiffness: F,
    /// Base spacing between consecutive beads. Default: 18.
    pub bead_spacing: F,
    /// Default: 6.
    pub radius_ave: F,
    /// Default: 8.5.
    pub radius_pater: F,
    /// Default: 9.5.
    pub radius_medal: F,
    /// Width of the drawn cross (render hint). Default: 24.
    pub cross_width: F,
    /// Height of the drawn cross (render hint). Default: 34.
    pub cross_height: F,
    /// Pick radius of the cross anchor node. Default: 4.5.
    pub cross_hit_radius: F,
    /// Strength of the soft overlap push. Default: 0.3.
    pub collision_repulsion: F,
    /// Gap kept between a node's rim and the surface edge. Default: 2.
    pub boundary_margin: F,
    /// Extra reach beyond a node's radius when picking it. Default: 10.
    pub pick_reach_margin: F,
    /// Overall search cutoff for drag picks. Default: 28.
    pub pick_radius: F,
    /// Overall search cutoff for pin toggles. Default: 22.
    pub pin_pick_radius: F,
    /// Maximum initial offset per axis applied after placement. Default: 1.
    pub jitter: F,
    /// Seed for the placement jitter.
    pub jitter_seed: u64,
    /// Default: true.
    pub gravity_enabled: bool,
    /// Default: true.
    pub collision_enabled: bool,
    /// Largest time delta a single step accepts, in seconds. Default: 0.033.
    pub max_frame_dt: F,
}

impl<F: Float> SimConfig<F> {
    /// Create a config with default values.
    pub fn new() -> Self {
        SimConfig {
            iterations: 12,
            gravity: F::from_f32(1200.0),
            damping: F::from_f32(0.12),
            stiffness: F::from_f32(0.5),
            bead_spacing: F::from_f32(18.0),
            radius_ave: F::from_f32(6.0),
            radius_pater: F::from_f32(8.5),
            radius_medal: F::from_f32(9.5),
            cross_width: F::from_f32(24.0),
            cross_height: F::from_f32(34.0),
            cross_hit_radius: F::from_f32(4.5),
            collision_repulsion: F::from_f32(0.3),
            boundary_margin: F::from_f32(2.0),
            pick_reach_margin: F::from_f32(10.0),
            pick_radius: F::from_f32(28.0),
            pin_pick_radius: F::from_f32(22.0),
            jitter: F::one(),
            jitter_seed: 0x5EED_0B0E,
            gravity_enabled: true,
            collision_enabled: true,
            max_frame_dt: F::from_f32(0.033),
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_bead_spacing(mut self, spacing: F) -> Self {
        self.bead_spacing = spacing;
        self
    }

    /// Set the per-category radii (ave, pater, medal).
    pub fn with_radii(mut self, ave: F, pater: F, medal: F) -> Self {
        self.radius_ave = ave;
        self.radius_pater = pater;
        self.radius_medal = medal;
        self
    }

    pub fn with_collision_repulsion(mut self, repulsion: F) -> Self {
        self.collision_repulsion = repulsion;
        self
    }

    /// Set the jitter amplitude and seed. An amplitude of zero disables jitter.
    pub fn with_jitter(mut self, amplitude: F, seed: u64) -> Self {
        self.jitter = amplitude;
        self.jitter_seed = seed;
        self
    }

    pub fn with_gravity_enabled(mut self, enabled: bool) -> Self {
        self.gravity_enabled = enabled;
        self
    }

    pub fn with_collision(mut self, enabled: bool) -> Self {
        self.collision_enabled = enabled;
        self
    }

    pub fn with_max_frame_dt(mut self, max_dt: F) -> Self {
        self.max_frame_dt = max_dt;
        self
    }

    /// Check every knob is finite and within its allowed range.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(RosaryError::InvalidIterations);
        }
        if !self.stiffness.is_finite() || self.stiffness < F::zero() || self.stiffness > F::one() {
            return Err(RosaryError::InvalidStiffness);
        }

        let positive = [
            ("bead_spacing", self.bead_spacing),
            ("radius_ave", self.radius_ave),
            ("radius_pater", self.radius_pater),
            ("radius_medal", self.radius_medal),
            ("cross_width", self.cross_width),
            ("cross_height", self.cross_height),
            ("cross_hit_radius", self.cross_hit_radius),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= F::zero() {
                return Err(RosaryError::InvalidParameter { name });
            }
        }

        let non_negative = [
            ("gravity", self.gravity),
            ("damping", self.damping),
            ("collision_repulsion", self.collision_repulsion),
            ("boundary_margin", self.boundary_margin),
            ("pick_reach_margin", self.pick_reach_margin),
            ("pick_radius", self.pick_radius),
            ("pin_pick_radius", self.pin_pick_radius),
            ("jitter", self.jitter),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < F::zero() {
                return Err(RosaryError::InvalidParameter { name });
            }
        }
        Ok(())
    }

    /// Length knobs multiplied by `scale`, which is clamped to the minimum scale first.
    pub fn scaled(&self, scale: F) -> ScaledConfig<F> {
        let floor = F::from_f32(crate::scale::MIN_SCALE);
        let s = if scale.is_finite() { scale.max(floor) } else { floor };
        ScaledConfig {
            scale: s,
            bead_spacing: self.bead_spacing * s,
            radius_ave: self.radius_ave * s,
            radius_pater: self.radius_pater * s,
            radius_medal: self.radius_medal * s,
            cross_width: self.cross_width * s,
            cross_height: self.cross_height * s,
            cross_hit_radius: self.cross_hit_radius * s,
        }
    }
}

impl<F: Float> Default for SimConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Length knobs after applying the scale factor.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaledConfig<F: Float> {
    pub scale: F,
    pub bead_spacing: F,
    pub radius_ave: F,
    pub radius_pater: F,
    pub radius_medal: F,
    pub cross_width: F,
    pub cross_height: F,
    pub cross_hit_radius: F,
}

impl<F: Float> ScaledConfig<F> {
    /// Radius from the category table. The cross anchor falls back to the ave radius.
    pub fn radius_for(&self, kind: NodeKind) -> F {
        match kind {
            NodeKind::Ave => self.radius_ave,
            NodeKind::Pater => self.radius_pater,
            NodeKind::Medal => self.radius_medal,
            NodeKind::CrossAnchor => self.radius_ave,
        }
    }
}

/// Everything a host needs to know about the active configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigSnapshot<F: Float> {
    pub config: SimConfig<F>,
    pub scaled: ScaledConfig<F>,
    pub surface: Surface<F>,
}
