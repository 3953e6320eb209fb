//! End-to-end: generate a scene, render a seamless loop, encode it as a GIF.

use std::io::Cursor;

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;
use orrery_core::{
    BodySeed, OrbitSeed, SceneConfig, SunAlignment, generate_scene, generate_scene_with_seeds,
};
use orrery_render::{FrameComposer, FrameSink, GifSink, RasterSurface};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn config() -> SceneConfig {
    SceneConfig {
        width: 128,
        height: 96,
        star_density: 0.02,
        planets: 2,
        sun_size: 6,
        sun_alignment: SunAlignment::Center,
        seed: Some(3),
    }
}

fn short_period_seed(period: u32) -> BodySeed {
    BodySeed {
        orbit: OrbitSeed {
            period: Some(period),
            ..OrbitSeed::default()
        },
        ..BodySeed::default()
    }
}

#[test]
fn test_loop_end_matches_loop_start() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let scene = generate_scene(&config(), &mut rng).unwrap();
    let n = scene.loop_frame_count() as i64;
    let composer = FrameComposer::new(3.0);

    let mut first = RasterSurface::new(scene.width, scene.height);
    composer.compose(&scene, 0, &mut first);
    let mut last = RasterSurface::new(scene.width, scene.height);
    composer.compose(&scene, n, &mut last);

    assert_eq!(first.image(), last.image());
}

#[test]
fn test_gif_contains_every_loop_frame() {
    let seeds = [short_period_seed(4), short_period_seed(6)];
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let scene = generate_scene_with_seeds(&config(), &seeds, &mut rng).unwrap();
    let frames = scene.loop_frame_count();
    assert_eq!(frames, 12);

    let mut bytes = Vec::new();
    {
        let mut sink = GifSink::new(&mut bytes, 50).unwrap();
        FrameComposer::default()
            .render_sequence(&scene, frames, &mut sink)
            .unwrap();
        sink.finish().unwrap();
    }

    let decoder = GifDecoder::new(Cursor::new(bytes)).unwrap();
    let decoded = decoder.into_frames().collect_frames().unwrap();
    assert_eq!(decoded.len(), 12);
    assert_eq!(decoded[0].buffer().dimensions(), (128, 96));
}

#[test]
fn test_invalid_config_produces_nothing() {
    let bad = SceneConfig {
        star_density: -1.0,
        ..config()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    assert!(generate_scene(&bad, &mut rng).is_err());
}
