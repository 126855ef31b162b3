//! Polar coordinates on the knowledge crystal.
//!
//! Radius encodes time (how many evolutionary steps separate a layer from
//! its seed, weighted by how radical each step was). Angle encodes meaning.
//! Both are `f64` so that mutation-scaled growth composes without rounding
//! to a grid.

use crate::{Sector, BASE_GROWTH, FULL_TURN, MUTATION_GROWTH};

/// Wrap an angle in degrees into [0, 360).
///
/// `rem_euclid` can round a tiny negative input up to exactly 360.0, so that
/// case folds back to 0.0. Non-finite input has no meaningful position and
/// maps to 0.0.
pub fn normalize_angle(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(FULL_TURN);
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// One growth step from a parent position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Growth {
    /// How radical the step is, in [0, 1].
    pub mutation_degree: f64,
    /// Unit jitter sample in [-1, 1].
    pub jitter: f64,
    /// Maximum angular shift (degrees) at full mutation.
    pub jitter_bound: f64,
}

impl Growth {
    /// A step with no angular perturbation.
    pub const fn steady(mutation_degree: f64) -> Self {
        Self {
            mutation_degree,
            jitter: 0.0,
            jitter_bound: 0.0,
        }
    }

    /// Radial distance covered by this step.
    ///
    /// Always at least [`BASE_GROWTH`], so radius strictly increases.
    #[inline]
    pub fn radial(&self) -> f64 {
        BASE_GROWTH + self.mutation_degree * MUTATION_GROWTH
    }

    /// Signed angular shift in degrees. Zero if any input is non-finite.
    #[inline]
    pub fn angular(&self) -> f64 {
        let shift = self.jitter.clamp(-1.0, 1.0) * self.jitter_bound * self.mutation_degree;
        if shift.is_finite() {
            shift
        } else {
            0.0
        }
    }
}

/// A position on the crystal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarCoord {
    /// Evolutionary depth (>= 0).
    pub radius: f64,
    /// Semantic position in degrees, in [0, 360).
    pub angle: f64,
}

impl PolarCoord {
    /// Create a coordinate, normalizing the angle.
    pub fn new(radius: f64, angle: f64) -> Self {
        Self {
            radius,
            angle: normalize_angle(angle),
        }
    }

    /// A point on the seed ring (radius 0).
    pub fn seed(angle: f64) -> Self {
        Self::new(0.0, angle)
    }

    /// Position reached by taking `growth` from this point.
    pub fn grow(&self, growth: &Growth) -> Self {
        Self::new(self.radius + growth.radial(), self.angle + growth.angular())
    }

    /// The sector containing this point.
    pub fn sector(&self) -> Sector {
        Sector::of(self.angle)
    }

    /// True if this point lies on the seed ring.
    pub fn is_origin_ring(&self) -> bool {
        self.radius == 0.0
    }
}

impl std::fmt::Display for PolarCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(r={:.1}, θ={:.1}°)", self.radius, self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_wraps_overflow() {
        assert_eq!(normalize_angle(370.0), 10.0);
        assert_eq!(normalize_angle(720.0), 0.0);
        assert_eq!(normalize_angle(360.0), 0.0);
    }

    #[test]
    fn normalize_wraps_negative() {
        assert_eq!(normalize_angle(-10.0), 350.0);
        assert_eq!(normalize_angle(-360.0), 0.0);
    }

    #[test]
    fn normalize_never_returns_full_turn() {
        let tiny = -1e-15;
        let wrapped = normalize_angle(tiny);
        assert!(wrapped < FULL_TURN);
        assert!(wrapped >= 0.0);
    }

    #[test]
    fn normalize_non_finite() {
        assert_eq!(normalize_angle(f64::NAN), 0.0);
        assert_eq!(normalize_angle(f64::INFINITY), 0.0);
    }

    #[test]
    fn growth_radial_scales_with_mutation() {
        assert_eq!(Growth::steady(0.0).radial(), 1.0);
        assert_eq!(Growth::steady(1.0).radial(), 3.0);
        assert!((Growth::steady(0.2).radial() - 1.4).abs() < 1e-12);
    }

    #[test]
    fn zero_mutation_has_no_shift() {
        let growth = Growth {
            mutation_degree: 0.0,
            jitter: 1.0,
            jitter_bound: 10.0,
        };
        assert_eq!(growth.angular(), 0.0);
    }

    #[test]
    fn shift_is_bounded() {
        let growth = Growth {
            mutation_degree: 0.5,
            jitter: -1.0,
            jitter_bound: 10.0,
        };
        assert_eq!(growth.angular(), -5.0);

        let overshoot = Growth { jitter: 4.0, ..growth };
        assert_eq!(overshoot.angular(), 5.0);
    }

    #[test]
    fn non_finite_inputs_do_not_shift() {
        let nan_jitter = Growth {
            mutation_degree: 0.0,
            jitter: f64::NAN,
            jitter_bound: 10.0,
        };
        assert_eq!(nan_jitter.angular(), 0.0);

        let endless = Growth {
            mutation_degree: 0.0,
            jitter: 0.3,
            jitter_bound: f64::INFINITY,
        };
        assert_eq!(endless.angular(), 0.0);
        assert_eq!(PolarCoord::seed(180.0).grow(&endless).angle, 180.0);
    }

    #[test]
    fn grow_wraps_angle() {
        let start = PolarCoord::seed(359.0);
        let growth = Growth {
            mutation_degree: 1.0,
            jitter: 0.5,
            jitter_bound: 10.0,
        };
        let next = start.grow(&growth);
        assert_eq!(next.radius, 3.0);
        assert!((next.angle - 4.0).abs() < 1e-9);
        assert_eq!(next.sector(), Sector::Earth);
    }

    #[test]
    fn seed_ring() {
        assert!(PolarCoord::seed(60.0).is_origin_ring());
        assert!(!PolarCoord::new(1.0, 60.0).is_origin_ring());
    }
}
