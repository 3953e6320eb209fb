//! Orbit descriptors and their random synthesis.
//!
//! Every orbit is an independent ellipse with the sun at one focus. Nothing here
//! models gravity: the shape and timing are drawn directly, and the period is the
//! ellipse perimeter so that bodies move at roughly one pixel per step.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use rand::Rng;

/// A fully specified elliptical orbit. Immutable once generated.
#[derive(Clone, Debug, PartialEq)]
pub struct Orbit {
    /// Semi-major axis in pixels.
    pub semi_major_axis: f64,
    /// Semi-minor axis in pixels, never larger than the semi-major axis.
    pub semi_minor_axis: f64,
    /// Orientation of the major axis in radians.
    pub rotation: f64,
    /// Time steps per revolution.
    pub period: u32,
    /// Phase shift in time steps, in `[0, period)`.
    pub phase_offset: u32,
    /// Center of the ellipse. Placed so that one focus sits on the sun.
    pub focus: DVec2,
    /// `sqrt(1 - b²/a²)`. 0 is a circle, 1 the degenerate flat ellipse.
    pub eccentricity: f64,
}

/// Geometric limits for generated orbits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitBounds {
    /// Fixed sun position; one focus of every orbit.
    pub sun: DVec2,
    /// Smallest semi-major axis (the sun's render radius). Must be at least 1.
    pub min_radius: f64,
    /// Largest semi-major axis.
    ///
    /// A quarter of the smaller canvas dimension. This is loose: an elongated
    /// orbit whose far extremum points along the short side of a non-square
    /// canvas, or a sun aligned to an edge, can still leave part of the path
    /// off-canvas.
    pub max_radius: f64,
}

impl OrbitBounds {
    pub fn for_canvas(width: u32, height: u32, sun: DVec2, sun_size: u32) -> Self {
        Self {
            sun,
            min_radius: f64::from(sun_size),
            max_radius: f64::from(width.min(height)) / 4.0,
        }
    }
}

/// A partially specified orbit. `None` fields are drawn at random; `Some`
/// fields are kept verbatim.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrbitSeed {
    pub semi_major_axis: Option<f64>,
    pub semi_minor_axis: Option<f64>,
    pub rotation: Option<f64>,
    pub period: Option<u32>,
    pub phase_offset: Option<u32>,
    pub focus: Option<DVec2>,
    pub eccentricity: Option<f64>,
}

/// Ramanujan's approximation of an ellipse perimeter.
pub fn ellipse_perimeter(a: f64, b: f64) -> f64 {
    PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
}

impl OrbitSeed {
    /// Fill every unset field, in dependency order: axes, rotation, period,
    /// phase, focus, eccentricity.
    pub fn generate<R: Rng + ?Sized>(&self, bounds: &OrbitBounds, rng: &mut R) -> Orbit {
        debug_assert!(bounds.min_radius >= 1.0, "orbit radius floor must be >= 1");

        let semi_major_axis = self.semi_major_axis.unwrap_or_else(|| {
            let hi = bounds.max_radius.max(bounds.min_radius);
            rng.random_range(bounds.min_radius..=hi).round()
        });
        let semi_minor_axis = self
            .semi_minor_axis
            .unwrap_or_else(|| rng.random_range(0.0..=semi_major_axis.max(0.0)).round());
        let rotation = self
            .rotation
            .unwrap_or_else(|| rng.random_range(0.0..TAU));
        let period = self
            .period
            .unwrap_or_else(|| ellipse_perimeter(semi_minor_axis, semi_major_axis).round() as u32);
        let phase_offset = self.phase_offset.unwrap_or_else(|| {
            if period == 0 {
                0
            } else {
                rng.random_range(0..period)
            }
        });

        let focus = self.focus.unwrap_or_else(|| {
            let c = linear_eccentricity(semi_major_axis, semi_minor_axis);
            DVec2::new(
                (bounds.sun.x + c * rotation.sin()).floor(),
                (bounds.sun.y - c * rotation.cos()).floor(),
            )
        });
        let eccentricity = self
            .eccentricity
            .unwrap_or_else(|| eccentricity(semi_major_axis, semi_minor_axis));

        if period == 0 {
            log::warn!("Generated orbit with zero period (semi-major axis {semi_major_axis})");
        }

        Orbit {
            semi_major_axis,
            semi_minor_axis,
            rotation,
            period,
            phase_offset,
            focus,
            eccentricity,
        }
    }
}

/// Distance from the ellipse center to either focus.
fn linear_eccentricity(a: f64, b: f64) -> f64 {
    (a * a - b * b).max(0.0).sqrt()
}

fn eccentricity(a: f64, b: f64) -> f64 {
    if a <= 0.0 {
        return 0.0;
    }
    (1.0 - (b * b) / (a * a)).clamp(0.0, 1.0).sqrt()
}
