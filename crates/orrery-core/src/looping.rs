//! Frame count for a seamless loop: the least common multiple of all periods.

/// Greatest common divisor (Euclid).
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, saturating at `u64::MAX`. `lcm(0, x)` is 0.
pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b)).saturating_mul(b)
}

/// Number of frames after which every period has completed a whole number of
/// cycles, folded left to right. An empty sequence loops after one frame.
///
/// Zero periods cannot loop and are skipped with a warning.
pub fn loop_frame_count<I>(periods: I) -> u64
where
    I: IntoIterator<Item = u32>,
{
    periods.into_iter().fold(1, |acc, period| {
        if period == 0 {
            log::warn!("Skipping zero period in loop length");
            acc
        } else {
            lcm(acc, u64::from(period))
        }
    })
}
