//! Seeded random source for scene generation.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The generator used for scenes. Any `Rng` works with the generation functions;
/// this is the one the binary seeds.
pub type SceneRng = ChaCha8Rng;

/// Build the scene generator. Returns the seed actually used so an unseeded run
/// can be reproduced later.
pub fn scene_rng(seed: Option<u64>) -> (SceneRng, u64) {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    (ChaCha8Rng::seed_from_u64(seed), seed)
}
