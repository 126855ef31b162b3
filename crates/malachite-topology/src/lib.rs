//! Malachite Crystal Topology
//!
//! Polar coordinate system for evolutionary knowledge storage.
//!
//! # Coordinates
//!
//! Every layer of knowledge sits at a point `(radius, angle)`:
//! - **radius** is evolutionary depth. Seeds sit at the origin ring (r = 0)
//!   and every derived layer lies strictly further out than its parent.
//! - **angle** is semantic position in degrees, always normalized into
//!   the half-open range [0, 360).
//!
//! # Sectors
//!
//! The circle is split into three fixed sectors that partition every angle:
//! - EARTH [0, 120): matter, structure, science
//! - WATER [120, 240): energy, economy, flow
//! - SKY [240, 360): information, ethics, philosophy
//!
//! # Growth
//!
//! A step away from a parent grows the radius by one base unit plus a bonus
//! proportional to the mutation degree, and perturbs the angle by at most
//! `jitter_bound × mutation_degree` degrees.

mod polar;
mod sector;
mod spectrum;

pub use polar::{normalize_angle, Growth, PolarCoord};
pub use sector::{ParseSectorError, Sector};
pub use spectrum::Spectrum;

/// Degrees in a full turn.
pub const FULL_TURN: f64 = 360.0;

/// Number of sectors partitioning the circle.
pub const SECTOR_COUNT: usize = 3;

/// Angular width of each sector in degrees.
pub const SECTOR_WIDTH: f64 = FULL_TURN / SECTOR_COUNT as f64;

/// Radial growth of a zero-mutation step.
pub const BASE_GROWTH: f64 = 1.0;

/// Extra radial growth at mutation degree 1.0.
pub const MUTATION_GROWTH: f64 = 2.0;

/// Default maximum angular perturbation (degrees) at mutation degree 1.0.
pub const DEFAULT_JITTER_BOUND: f64 = 10.0;
