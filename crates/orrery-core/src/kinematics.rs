//! Orbital motion: the phase-warp curve, body positions, and trail arcs.
//!
//! Bodies do not move at constant angular speed. The phase of an orbit is pushed
//! through [`warp`], a hand-fitted rational curve that spends less time near phase
//! 0.5 (periapsis) the more eccentric the orbit is. This only approximates
//! Kepler's second law; no Kepler equation is solved.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::{DVec2, IVec2};

use crate::orbit::Orbit;

/// Angular offset of the body position: phase 0 lands on the apoapsis.
const POSITION_OFFSET: f64 = PI;

/// Angular offset for trail arcs. The stroke primitive parametrizes the ellipse
/// with x-radius = semi-minor axis, which shifts angles a further quarter turn.
const ARC_OFFSET: f64 = PI + FRAC_PI_2;

/// Pole location of the rational curve for a given steepness `n`.
fn g(n: f64) -> f64 {
    0.5 * (1.0 + 1.0 / (n / (n + 4.0)).sqrt())
}

/// Rational curve with `h(0) = 0` and `h(0.5) = 0.5`, steepening towards 0.5 as `n` grows.
fn h(x: f64, n: f64) -> f64 {
    let g = g(n);
    0.5 * ((-1.0 / (n * (2.0 * x - g))) - g) + 0.5
}

/// Lower half of the curve, `t` in `[0, 0.5]`.
fn warp_half(t: f64, s: f64) -> f64 {
    (1.0 - s) * h(t, 1.0 / s) + s * t
}

/// Warp a normalized orbital phase `t` in `[0, 1]` by shape `s = 1 - e`.
///
/// `s = 1` (circular orbit) is the identity. As `s` approaches 0 the curve
/// flattens near 0 and 1 and becomes steep around 0.5, so a body sweeps quickly
/// through periapsis. The curve is symmetric: `warp(t, s) = 1 - warp(1 - t, s)`.
///
/// `t` outside `[0, 1]` is logged and yields 0. For `s <= 0` (a flat ellipse) the
/// limiting step function is returned: 0 before the midpoint, 0.5 at it, 1 after.
pub fn warp(t: f64, s: f64) -> f64 {
    if !(0.0..=1.0).contains(&t) {
        log::warn!("Phase {t} outside [0, 1], using 0");
        return 0.0;
    }
    if s <= 0.0 {
        return if t < 0.5 {
            0.0
        } else if t == 0.5 {
            0.5
        } else {
            1.0
        };
    }
    if t < 0.5 {
        warp_half(t, s)
    } else {
        1.0 - warp_half(1.0 - t, s)
    }
}

/// The visible portion of a body's trail, as bounds for an elliptical-arc stroke.
///
/// The ellipse is centered on `center`, has radii `radius_x` and `radius_y`, and
/// is rotated by `rotation`. Points are
/// `center + rotate(rotation) * (radius_x * cos(a), radius_y * sin(a))`.
/// The arc runs with increasing angle from `start_angle` to `end_angle`,
/// wrapping through a full turn when `end_angle < start_angle`. `full` marks a
/// trail covering a whole revolution, where the two angles coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailArc {
    pub center: DVec2,
    pub radius_x: f64,
    pub radius_y: f64,
    pub rotation: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub full: bool,
}

impl TrailArc {
    /// Angle covered from start to end: `2π` for a full trail, otherwise in
    /// `[0, 2π)`, with 0 when the angles coincide.
    pub fn sweep(&self) -> f64 {
        if self.full {
            return TAU;
        }
        let sweep = (self.end_angle - self.start_angle).rem_euclid(TAU);
        if sweep >= TAU { 0.0 } else { sweep.abs() }
    }

    /// Point on the arc's ellipse at parameter `angle`.
    pub fn point_at(&self, angle: f64) -> DVec2 {
        let (sin_r, cos_r) = self.rotation.sin_cos();
        let local = DVec2::new(self.radius_x * angle.cos(), self.radius_y * angle.sin());
        self.center + DVec2::new(local.x * cos_r - local.y * sin_r, local.x * sin_r + local.y * cos_r)
    }
}

impl Orbit {
    /// Position of `t` within the current revolution, in `[0, 1)`. Any integer
    /// `t` is accepted, including negative ones. A zero period gives 0.
    pub fn relative_phase(&self, t: i64) -> f64 {
        if self.period == 0 {
            return 0.0;
        }
        let period = i64::from(self.period);
        let steps = (t.rem_euclid(period) + i64::from(self.phase_offset)) % period;
        steps as f64 / period as f64
    }

    /// Relative phase after applying the eccentricity warp.
    pub fn warped_phase(&self, t: i64) -> f64 {
        warp(self.relative_phase(t), 1.0 - self.eccentricity)
    }

    /// Exact (unrounded) center of the body at time step `t`.
    pub fn point_at(&self, t: i64) -> DVec2 {
        let theta = self.warped_phase(t) * TAU + POSITION_OFFSET;
        let (sin_t, cos_t) = theta.sin_cos();
        let (sin_r, cos_r) = self.rotation.sin_cos();
        let a = self.semi_major_axis;
        let b = self.semi_minor_axis;
        DVec2::new(
            self.focus.x - a * cos_t * sin_r - b * sin_t * cos_r,
            self.focus.y + a * cos_t * cos_r - b * sin_t * sin_r,
        )
    }

    /// Pixel position of the body at time step `t`. Periodic in `period`.
    pub fn position_at(&self, t: i64) -> IVec2 {
        let p = self.point_at(t);
        IVec2::new(p.x.round() as i32, p.y.round() as i32)
    }

    /// Stroke angle matching the body position at `t` on a [`TrailArc`] ellipse.
    fn arc_angle(&self, t: i64) -> f64 {
        self.warped_phase(t) * TAU + ARC_OFFSET
    }

    /// Trail bounds ending at the body's position at `t`.
    ///
    /// The trail covers `floor(period / trail_length)` steps, capped at one full
    /// revolution. Returns `None` when trails are disabled (`trail_length` is 0,
    /// negative, or not finite), the span is empty, or the body has not moved
    /// along its ellipse over a span shorter than the period.
    pub fn trail_arc(&self, t: i64, trail_length: f64) -> Option<TrailArc> {
        if !(trail_length > 0.0 && trail_length.is_finite()) || self.period == 0 {
            return None;
        }
        let period = i64::from(self.period);
        let span = ((self.period as f64 / trail_length).floor() as i64).min(period);
        if span <= 0 {
            return None;
        }
        let arc = TrailArc {
            center: self.focus,
            radius_x: self.semi_minor_axis,
            radius_y: self.semi_major_axis,
            rotation: self.rotation,
            start_angle: self.arc_angle(t - span),
            end_angle: self.arc_angle(t),
            full: span == period,
        };
        (arc.sweep() > 0.0).then_some(arc)
    }
}
