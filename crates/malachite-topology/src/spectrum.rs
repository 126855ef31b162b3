//! Spectral signature: the "colour" of an idea.

/// A tone triple with each component clamped to [0, 1].
///
/// - `r`: energy, passion
/// - `g`: matter, growth
/// - `b`: spirit, logic
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spectrum {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Spectrum {
    /// Lower bound of every component.
    pub const MIN: f64 = 0.0;
    /// Upper bound of every component.
    pub const MAX: f64 = 1.0;

    /// Midpoint grey carried by every seed.
    pub const NEUTRAL: Self = Self { r: 0.5, g: 0.5, b: 0.5 };

    /// Create a spectrum, clamping components into range.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_component(r),
            g: clamp_component(g),
            b: clamp_component(b),
        }
    }

    /// Linear blend towards `other`; `weight` 0 keeps `self`, 1 yields `other`.
    pub fn mix(&self, other: &Self, weight: f64) -> Self {
        let w = weight.clamp(0.0, 1.0);
        Self::new(
            self.r * (1.0 - w) + other.r * w,
            self.g * (1.0 - w) + other.g * w,
            self.b * (1.0 - w) + other.b * w,
        )
    }

    /// True if every component is within [0, 1].
    pub fn is_bounded(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (Self::MIN..=Self::MAX).contains(c))
    }
}

impl Default for Spectrum {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

fn clamp_component(c: f64) -> f64 {
    if c.is_nan() {
        return Spectrum::NEUTRAL.r;
    }
    c.clamp(Spectrum::MIN, Spectrum::MAX)
}
