//! The three fundamental domains of the crystal.

use crate::{normalize_angle, SECTOR_WIDTH};
use std::str::FromStr;
use thiserror::Error;

/// A fixed angular partition of the circle.
///
/// Ranges are half-open `[start, end)`. Because angles are normalized into
/// [0, 360), the three sectors cover every angle exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Sector {
    /// Matter, structure, science.
    Earth,
    /// Energy, economy, flow.
    Water,
    /// Information, ethics, philosophy.
    Sky,
}

impl Sector {
    /// All sectors in angular order.
    pub const ALL: [Self; 3] = [Self::Earth, Self::Water, Self::Sky];

    /// Position of this sector in angular order.
    const fn index(self) -> usize {
        match self {
            Self::Earth => 0,
            Self::Water => 1,
            Self::Sky => 2,
        }
    }

    /// Half-open degree range `[start, end)`.
    pub fn range(self) -> (f64, f64) {
        let start = self.index() as f64 * SECTOR_WIDTH;
        (start, start + SECTOR_WIDTH)
    }

    /// True if `angle` (already normalized) lies in this sector.
    pub fn contains(self, angle: f64) -> bool {
        let (start, end) = self.range();
        start <= angle && angle < end
    }

    /// The sector an angle falls in. The angle is normalized first.
    pub fn of(angle: f64) -> Self {
        let angle = normalize_angle(angle);
        Self::ALL
            .into_iter()
            .find(|s| s.contains(angle))
            .unwrap_or(Self::Sky)
    }

    /// Canonical upper-case name, as used in seed tags.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Earth => "EARTH",
            Self::Water => "WATER",
            Self::Sky => "SKY",
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no sector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sector: {0}")]
pub struct ParseSectorError(pub String);

impl FromStr for Sector {
    type Err = ParseSectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "EARTH" => Ok(Self::Earth),
            "WATER" => Ok(Self::Water),
            "SKY" => Ok(Self::Sky),
            _ => Err(ParseSectorError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_boundaries() {
        assert_eq!(Sector::Earth.range(), (0.0, 120.0));
        assert_eq!(Sector::Water.range(), (120.0, 240.0));
        assert_eq!(Sector::Sky.range(), (240.0, 360.0));
    }

    #[test]
    fn boundary_angles_belong_to_upper_sector() {
        assert_eq!(Sector::of(0.0), Sector::Earth);
        assert_eq!(Sector::of(120.0), Sector::Water);
        assert_eq!(Sector::of(240.0), Sector::Sky);
        assert_eq!(Sector::of(359.999), Sector::Sky);
    }

    #[test]
    fn full_turn_wraps_to_earth() {
        assert_eq!(Sector::of(360.0), Sector::Earth);
        assert!(!Sector::Sky.contains(360.0));
    }

    #[test]
    fn seed_angles() {
        assert_eq!(Sector::of(60.0), Sector::Earth);
        assert_eq!(Sector::of(180.0), Sector::Water);
        assert_eq!(Sector::of(270.0), Sector::Sky);
        assert_eq!(Sector::of(300.0), Sector::Sky);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("earth".parse::<Sector>(), Ok(Sector::Earth));
        assert_eq!(" Water ".parse::<Sector>(), Ok(Sector::Water));
        assert_eq!("SKY".parse::<Sector>(), Ok(Sector::Sky));
    }

    #[test]
    fn parse_unknown_fails() {
        let err = "fire".parse::<Sector>().unwrap_err();
        assert_eq!(err, ParseSectorError("fire".to_string()));
        assert_eq!(err.to_string(), "unknown sector: fire");
    }

    #[test]
    fn exactly_one_sector_per_angle() {
        for tenth in 0..3600 {
            let angle = tenth as f64 / 10.0;
            let hits = Sector::ALL.iter().filter(|s| s.contains(angle)).count();
            assert_eq!(hits, 1, "angle {angle}");
        }
    }
}
