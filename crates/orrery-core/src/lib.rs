//! Orbital kinematics and procedural generation for a miniature planetary system.
//!
//! A [`Scene`] is generated once from a [`SceneConfig`] and an injected random
//! source, then queried per frame: [`Orbit::position_at`] gives each body's pixel
//! position, [`Orbit::trail_arc`] the stroke bounds of its trail, and
//! [`Scene::loop_frame_count`] the frame count of a seamless loop. Everything
//! here is pure over the immutable scene, so frames may be computed in any order
//! or in parallel.

pub mod color;
pub mod kinematics;
pub mod looping;
pub mod orbit;
pub mod rng;
pub mod scene;
pub mod starfield;

pub use color::{ParseColorError, Rgb};
pub use kinematics::{TrailArc, warp};
pub use looping::{gcd, lcm, loop_frame_count};
pub use orbit::{Orbit, OrbitBounds, OrbitSeed, ellipse_perimeter};
pub use orrery_config::{ConfigError, SceneConfig, SunAlignment};
pub use rng::{SceneRng, scene_rng};
pub use scene::{Body, BodySeed, Scene, generate_scene, generate_scene_with_seeds, sun_position};
pub use starfield::{BRIGHTNESS_CLASSES, Star, generate_starfield};
