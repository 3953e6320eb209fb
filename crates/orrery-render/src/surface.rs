//! Drawing primitives and a CPU raster implementation.

use glam::DVec2;
use image::{Rgba, RgbaImage};
use orrery_core::{Rgb, TrailArc};

/// The primitives a frame is built from. Coordinates are pixels, origin top-left.
pub trait DrawSurface {
    /// Fill the whole surface.
    fn clear(&mut self, color: Rgb);

    /// Set one pixel. Out-of-bounds writes are ignored.
    fn plot(&mut self, x: i32, y: i32, color: Rgb);

    /// Fill a disc.
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb);

    /// Stroke the arc of an ellipse with the given line width.
    fn stroke_arc(&mut self, arc: &TrailArc, width: f64, color: Rgb);
}

/// A [`DrawSurface`] backed by an in-memory RGBA image.
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Color at a pixel, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.image.width() && y < self.image.height() {
            let Rgba([r, g, b, _]) = *self.image.get_pixel(x, y);
            Some(Rgb::new(r, g, b))
        } else {
            None
        }
    }
}

impl DrawSurface for RasterSurface {
    fn clear(&mut self, color: Rgb) {
        let px = Rgba([color.r, color.g, color.b, 255]);
        for p in self.image.pixels_mut() {
            *p = px;
        }
    }

    fn plot(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image
                .put_pixel(x, y, Rgba([color.r, color.g, color.b, 255]));
        }
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Rgb) {
        if radius <= 0.0 {
            self.plot(center.x.round() as i32, center.y.round() as i32, color);
            return;
        }
        let r2 = radius * radius;
        let x0 = (center.x - radius).floor() as i32;
        let x1 = (center.x + radius).ceil() as i32;
        let y0 = (center.y - radius).floor() as i32;
        let y1 = (center.y + radius).ceil() as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = DVec2::new(f64::from(x), f64::from(y)) - center;
                if d.length_squared() <= r2 {
                    self.plot(x, y, color);
                }
            }
        }
    }

    fn stroke_arc(&mut self, arc: &TrailArc, width: f64, color: Rgb) {
        let sweep = arc.sweep();
        if sweep <= 0.0 {
            return;
        }
        // Keep consecutive samples under half a pixel apart.
        let radius = arc.radius_x.max(arc.radius_y).max(1.0);
        let steps = (sweep * radius * 2.0).ceil() as usize;
        let half_width = width / 2.0;
        for i in 0..=steps {
            let angle = arc.start_angle + sweep * (i as f64 / steps as f64);
            let p = arc.point_at(angle);
            if half_width > 0.5 {
                self.fill_circle(p, half_width, color);
            } else {
                self.plot(p.x.round() as i32, p.y.round() as i32, color);
            }
        }
    }
}
