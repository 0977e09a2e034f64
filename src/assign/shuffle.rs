//! Seeded permutations compatible with NumPy's legacy `RandomState`.
//!
//! Assignments must be reproducible against allocation tables produced by
//! the existing pandas tooling (`DataFrame.sample(frac=1, random_state=seed)`),
//! so permutations follow `RandomState(seed).permutation(n)` exactly:
//!
//! 1. MT19937 seeded with `init_genrand(seed)`.
//! 2. Fisher-Yates from the back: for `i = n-1 .. 1`, swap `i` with a
//!    uniform index in `0..=i`.
//! 3. Uniform index by masked rejection: draw 32 bits, keep the bits under
//!    the smallest all-ones mask covering `i`, redraw while above `i`.

use rand::RngCore;
use rand_mt::Mt;

/// MT19937 stream seeded like `numpy.random.RandomState(seed)`.
pub struct LegacyMt(Mt);

impl LegacyMt {
    /// Creates a generator from a 32-bit seed.
    pub fn new(seed: u32) -> Self {
        Self(Mt::new(seed))
    }
}

impl RngCore for LegacyMt {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        // High word first.
        let hi = u64::from(self.0.next_u32());
        (hi << 32) | u64::from(self.0.next_u32())
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.0.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Uniform integer in `0..=max` by masked rejection sampling.
pub fn bounded<R: RngCore>(rng: &mut R, max: u64) -> u64 {
    if max == 0 {
        return 0;
    }

    let mut mask = max;
    mask |= mask >> 1;
    mask |= mask >> 2;
    mask |= mask >> 4;
    mask |= mask >> 8;
    mask |= mask >> 16;
    mask |= mask >> 32;

    loop {
        let value = if max <= u64::from(u32::MAX) {
            u64::from(rng.next_u32()) & mask
        } else {
            rng.next_u64() & mask
        };
        if value <= max {
            return value;
        }
    }
}

/// Shuffles `items` in place, back to front.
pub fn legacy_shuffle<T, R: RngCore>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = bounded(rng, i as u64) as usize;
        items.swap(i, j);
    }
}

/// Returns a permutation of `0..len` for the given seed.
pub fn seeded_permutation(len: usize, seed: u32) -> Vec<usize> {
    let mut rng = LegacyMt::new(seed);
    let mut indices: Vec<usize> = (0..len).collect();
    legacy_shuffle(&mut indices, &mut rng);
    indices
}
