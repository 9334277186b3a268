/**
 * Random utilities.
 */

use std::time::SystemTime;
use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

/// The generator used when the caller just wants a seed to reproduce a run.
pub type DefaultRng = Mcg128Xsl64;

pub fn seed_from_system_time() -> u64 {
    SystemTime::now().duration_since(SystemTime::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

pub fn seeded(seed: u64) -> DefaultRng {
    Mcg128Xsl64::seed_from_u64(seed)
}

/// A uniform index below `len`, `None` when `len` is zero.
pub fn rand_index<R>(rng: &mut R, len: usize) -> Option<usize> where R : Rng {
    if len == 0 {
        None
    }
    else {
        Some(rng.gen_range(0, len))
    }
}

/// Picks an element uniformly, `None` for an empty slice.
pub fn sample<'a, T, R>(rng: &mut R, s: &'a [T]) -> Option<&'a T> where R : Rng {
    rand_index(rng, s.len()).map(|idx| &s[idx])
}
