//! Procedural background starfield: uniformly scattered points of light in a
//! few discrete brightness classes.

use rand::Rng;

/// Number of brightness classes. Classes are `0..BRIGHTNESS_CLASSES`.
pub const BRIGHTNESS_CLASSES: u8 = 5;

/// A single background star.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Star {
    /// Pixel column in `[0, width)`.
    pub x: u32,
    /// Pixel row in `[0, height)`.
    pub y: u32,
    /// Brightness class in `0..=4`. Class 0 is the most common and the dimmest.
    pub brightness: u8,
}

/// Scatter `floor(width * height * density)` stars over the canvas.
///
/// Positions are independent and may coincide. The brightness class is
/// `4 - floor(sqrt(u * 25))` for uniform `u` in `[0, 1)`, giving class `k`
/// probability `(9 - 2k) / 25`.
pub fn generate_starfield<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    density: f64,
    rng: &mut R,
) -> Vec<Star> {
    debug_assert!((0.0..=1.0).contains(&density), "density {density} outside [0, 1]");
    let density = density.clamp(0.0, 1.0);
    let count = (f64::from(width) * f64::from(height) * density).floor() as usize;

    let mut stars = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        let k = (rng.random::<f64>() * 25.0).sqrt().floor() as u8;
        stars.push(Star {
            x,
            y,
            brightness: (BRIGHTNESS_CLASSES - 1).saturating_sub(k),
        });
    }

    log::debug!("Generated {} stars on a {width}x{height} canvas", stars.len());
    stars
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_zero_density_yields_no_stars() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for (w, h) in [(64, 64), (400, 300), (1, 1)] {
            assert!(generate_starfield(w, h, 0.0, &mut rng).is_empty());
        }
    }

    #[test]
    fn test_full_density_fills_canvas_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let stars = generate_starfield(97, 61, 1.0, &mut rng);
        assert_eq!(stars.len(), 97 * 61);
    }

    #[test]
    fn test_count_is_floored() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // 100 * 100 * 0.00015 = 1.5
        assert_eq!(generate_starfield(100, 100, 0.00015, &mut rng).len(), 1);
    }

    #[test]
    fn test_stars_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for star in generate_starfield(120, 80, 0.5, &mut rng) {
            assert!(star.x < 120 && star.y < 80, "{star:?} out of bounds");
            assert!(star.brightness < BRIGHTNESS_CLASSES);
        }
    }

    #[test]
    fn test_brightness_distribution_skews_to_class_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let stars = generate_starfield(200, 200, 0.5, &mut rng);
        let mut counts = [0usize; BRIGHTNESS_CLASSES as usize];
        for star in &stars {
            counts[star.brightness as usize] += 1;
        }
        for pair in counts.windows(2) {
            assert!(pair[0] > pair[1], "counts not decreasing: {counts:?}");
        }
        // Class 0 expects 9/25 of 20000 = 7200.
        assert!((6800..7600).contains(&counts[0]), "{counts:?}");
    }

    #[test]
    fn test_same_seed_same_starfield() {
        let a = generate_starfield(64, 64, 0.1, &mut ChaCha8Rng::seed_from_u64(3));
        let b = generate_starfield(64, 64, 0.1, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
