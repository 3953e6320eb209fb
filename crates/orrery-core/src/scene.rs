//! Scene assembly: sun placement, bodies, and the starfield.

use glam::DVec2;
use rand::Rng;

use orrery_config::{ConfigError, SceneConfig, SunAlignment};

use crate::color::Rgb;
use crate::looping::loop_frame_count;
use crate::orbit::{Orbit, OrbitBounds, OrbitSeed};
use crate::starfield::{Star, generate_starfield};

/// An orbiting body.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Render radius in pixels.
    pub size: u32,
    pub color: Rgb,
    pub orbit: Orbit,
}

/// A partially specified body. Unset fields are drawn at random.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodySeed {
    pub size: Option<u32>,
    pub color: Option<Rgb>,
    pub orbit: OrbitSeed,
}

impl BodySeed {
    /// Fill every unset field. Random sizes are in `[1, max(1, sun_size / 2)]`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        bounds: &OrbitBounds,
        sun_size: u32,
        rng: &mut R,
    ) -> Body {
        let size = self
            .size
            .unwrap_or_else(|| rng.random_range(1..=(sun_size / 2).max(1)));
        let color = self.color.unwrap_or_else(|| Rgb::random(rng));
        let orbit = self.orbit.generate(bounds, rng);
        Body { size, color, orbit }
    }
}

/// The generated planetary system. Built once, then only read.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    /// Sun center; a focus of every orbit.
    pub sun: DVec2,
    /// Sun render radius in pixels.
    pub sun_size: u32,
    /// Bodies in paint order: later entries draw over earlier ones.
    pub bodies: Vec<Body>,
    pub stars: Vec<Star>,
}

impl Scene {
    /// Frames needed for every body to return to its starting point at once.
    pub fn loop_frame_count(&self) -> u64 {
        loop_frame_count(self.bodies.iter().map(|b| b.orbit.period))
    }

    /// Limits used for this scene's orbits.
    pub fn orbit_bounds(&self) -> OrbitBounds {
        OrbitBounds::for_canvas(self.width, self.height, self.sun, self.sun_size)
    }
}

/// Sun center for an alignment on a `width` x `height` canvas. Edge alignments
/// put the sun's center on that edge.
pub fn sun_position(alignment: SunAlignment, width: u32, height: u32) -> DVec2 {
    let w = f64::from(width);
    let h = f64::from(height);
    match alignment {
        SunAlignment::Center => DVec2::new(w / 2.0, h / 2.0),
        SunAlignment::Left => DVec2::new(0.0, h / 2.0),
        SunAlignment::Right => DVec2::new(w, h / 2.0),
        SunAlignment::Top => DVec2::new(w / 2.0, 0.0),
        SunAlignment::Bottom => DVec2::new(w / 2.0, h),
    }
}

/// Generate a fully random scene.
///
/// The config is validated first; on any violation nothing is generated and no
/// randomness is consumed.
pub fn generate_scene<R: Rng + ?Sized>(
    config: &SceneConfig,
    rng: &mut R,
) -> Result<Scene, ConfigError> {
    generate_scene_with_seeds(config, &[], rng)
}

/// Generate a scene whose first bodies come from `seeds`.
///
/// The scene holds `max(config.planets, seeds.len())` bodies: one per seed, in
/// order, followed by fully random bodies.
pub fn generate_scene_with_seeds<R: Rng + ?Sized>(
    config: &SceneConfig,
    seeds: &[BodySeed],
    rng: &mut R,
) -> Result<Scene, ConfigError> {
    config.validate()?;

    let sun = sun_position(config.sun_alignment, config.width, config.height);
    let bounds = OrbitBounds::for_canvas(config.width, config.height, sun, config.sun_size);

    let stars = generate_starfield(config.width, config.height, config.star_density, rng);

    let count = (config.planets as usize).max(seeds.len());
    let random_seed = BodySeed::default();
    let bodies: Vec<Body> = seeds
        .iter()
        .chain(std::iter::repeat(&random_seed))
        .take(count)
        .map(|seed| seed.generate(&bounds, config.sun_size, rng))
        .collect();

    log::info!(
        "Generated scene {}x{}: {} bodies, {} stars, sun at ({}, {})",
        config.width,
        config.height,
        bodies.len(),
        stars.len(),
        sun.x,
        sun.y
    );
    for (i, body) in bodies.iter().enumerate() {
        log::debug!(
            "Body {i}: size {} color {} a={} b={} e={:.3} period {}",
            body.size,
            body.color,
            body.orbit.semi_major_axis,
            body.orbit.semi_minor_axis,
            body.orbit.eccentricity,
            body.orbit.period
        );
    }

    Ok(Scene {
        width: config.width,
        height: config.height,
        sun,
        sun_size: config.sun_size,
        bodies,
        stars,
    })
}
