// Random input generation

use rand::Rng;

use crate::error::{Result, VisualizerError};

/// Number of bars generated when no length is given
pub const DEFAULT_LEN: usize = 20;

/// Largest length the bar chart can show legibly
pub const MAX_LEN: usize = 64;

/// Generated values fall in `0..VALUE_CEILING`
pub const VALUE_CEILING: i64 = 100;

/// Generate `len` values uniformly from `0..VALUE_CEILING`
pub fn random_sequence<R: Rng>(rng: &mut R, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(0..VALUE_CEILING)).collect()
}

/// Reject sequences longer than [`MAX_LEN`].
///
/// Every snapshot copies the whole sequence, so the cap also bounds the size
/// of a recorded history.
pub fn check_len(len: usize) -> Result<()> {
    if len > MAX_LEN {
        return Err(VisualizerError::InputTooLong { len, max: MAX_LEN });
    }
    Ok(())
}
