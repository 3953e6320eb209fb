//! Frame composition: paints one time step of a scene onto a [`DrawSurface`].

use glam::DVec2;
use orrery_core::{BRIGHTNESS_CLASSES, Rgb, Scene};

use crate::error::RenderError;
use crate::sink::FrameSink;
use crate::surface::{DrawSurface, RasterSurface};

/// Gray level of a star brightness class. Class 0 is the faintest.
pub fn star_color(brightness: u8) -> Rgb {
    let class = brightness.min(BRIGHTNESS_CLASSES - 1);
    let level = f32::from(class + 1) / f32::from(BRIGHTNESS_CLASSES);
    Rgb::WHITE.scaled(level)
}

/// Paints scenes frame by frame.
///
/// Paint order: background, stars, every trail, the sun, then bodies in scene
/// order, so later bodies cover earlier ones.
#[derive(Clone, Debug)]
pub struct FrameComposer {
    /// Trail divisor; 0 disables trails.
    pub trail_length: f64,
    pub background: Rgb,
    pub sun_color: Rgb,
    /// Trail stroke width in pixels.
    pub trail_width: f64,
    /// Trail color as a fraction of the body color.
    pub trail_intensity: f32,
}

impl Default for FrameComposer {
    fn default() -> Self {
        Self {
            trail_length: 4.0,
            background: Rgb::BLACK,
            sun_color: Rgb::SUN,
            trail_width: 1.0,
            trail_intensity: 0.5,
        }
    }
}

impl FrameComposer {
    pub fn new(trail_length: f64) -> Self {
        Self {
            trail_length,
            ..Self::default()
        }
    }

    /// Paint the scene as it looks at time step `t`.
    pub fn compose<S: DrawSurface + ?Sized>(&self, scene: &Scene, t: i64, surface: &mut S) {
        surface.clear(self.background);

        for star in &scene.stars {
            surface.plot(star.x as i32, star.y as i32, star_color(star.brightness));
        }

        for body in &scene.bodies {
            if let Some(arc) = body.orbit.trail_arc(t, self.trail_length) {
                surface.stroke_arc(
                    &arc,
                    self.trail_width,
                    body.color.scaled(self.trail_intensity),
                );
            }
        }

        surface.fill_circle(scene.sun, f64::from(scene.sun_size), self.sun_color);

        for body in &scene.bodies {
            let p = body.orbit.position_at(t);
            surface.fill_circle(
                DVec2::new(f64::from(p.x), f64::from(p.y)),
                f64::from(body.size),
                body.color,
            );
        }
    }

    /// Render frames `0..frames` in order and push each one into `sink`.
    pub fn render_sequence<K: FrameSink + ?Sized>(
        &self,
        scene: &Scene,
        frames: u64,
        sink: &mut K,
    ) -> Result<(), RenderError> {
        for t in 0..frames {
            let mut surface = RasterSurface::new(scene.width, scene.height);
            self.compose(scene, t as i64, &mut surface);
            sink.push_frame(surface.image())?;
            if t > 0 && t % 100 == 0 {
                log::debug!("Rendered {t}/{frames} frames");
            }
        }
        log::info!("Rendered {frames} frames");
        Ok(())
    }
}
