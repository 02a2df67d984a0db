//! Random input generation for the engines.

use crate::error::{Result, TraceError};
use nanorand::{Rng, WyRand};

pub const DEFAULT_SIZE: usize = 20;
pub const DEFAULT_MIN: i64 = 5;
pub const DEFAULT_MAX: i64 = 100;

/// `size` integers drawn uniformly from `min..=max`.
pub fn generate(size: usize, min: i64, max: i64) -> Result<Vec<i64>> {
    generate_from(&mut WyRand::new(), size, min, max)
}

/// As `generate`, but reproducible for a given `seed`.
pub fn generate_with_seed(seed: u64, size: usize, min: i64, max: i64) -> Result<Vec<i64>> {
    generate_from(&mut WyRand::new_seed(seed), size, min, max)
}

pub fn generate_default() -> Vec<i64> {
    let mut rng = WyRand::new();

    (0..DEFAULT_SIZE)
        .map(|_| draw(&mut rng, DEFAULT_MIN, DEFAULT_MAX))
        .collect()
}

/// Signed ranges are drawn as an unsigned offset from `min`; nanorand's signed inclusive
/// ranges are shifted down by one.
#[inline]
fn draw(rng: &mut WyRand, min: i64, max: i64) -> i64 {
    let span = max.abs_diff(min);

    // An inclusive unsigned range saturates at u64::MAX
    let offset = if span == u64::MAX {
        rng.generate::<u64>()
    } else {
        rng.generate_range(0..=span)
    };

    min.wrapping_add(offset as i64)
}

fn generate_from(rng: &mut WyRand, size: usize, min: i64, max: i64) -> Result<Vec<i64>> {
    if min > max {
        return Err(TraceError::InvalidBounds { min, max });
    }

    Ok((0..size).map(|_| draw(rng, min, max)).collect())
}
