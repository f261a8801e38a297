// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injectable randomness for color assignment and placement.
//!
//! Layout is randomized but must be reproducible: the same seed over the same
//! dataset yields the same layout. Every randomized step therefore draws from
//! a [`RandomSource`] handed in by the caller instead of a global generator.

/// A source of uniformly distributed random bits.
pub trait RandomSource {
    /// Returns the next 64 random bits.
    fn next_u64(&mut self) -> u64;

    /// Returns a uniform sample in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        let bits = self.next_u64() >> 11;
        bits as f64 / (1_u64 << 53) as f64
    }

    /// Returns a uniform index in `0..n`, or `0` when `n == 0`.
    fn below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "The remainder is smaller than `n`, which is a usize"
        )]
        {
            (self.next_u64() % n as u64) as usize
        }
    }

    /// Returns a fair coin flip.
    fn coin(&mut self) -> bool {
        (self.next_u64() >> 63) == 1
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// Small, fast, seedable xorshift generator.
///
/// Not suitable for anything security related; it exists to make layout
/// reproducible.
///
/// ```
/// use annals_layout::{RandomSource, XorShift64};
///
/// let mut a = XorShift64::new(7);
/// let mut b = XorShift64::new(7);
/// assert_eq!(a.next_u64(), b.next_u64());
///
/// let f = a.next_f64();
/// assert!((0.0..1.0).contains(&f));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a generator from `seed`. Any seed is valid, including zero.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        // The xorshift state must never be zero.
        Self {
            state: splitmix64(seed) | 1,
        }
    }

    /// Creates an independent generator for `stream` under `seed`.
    ///
    /// Layout derives one stream per region so that the placement of one
    /// region does not depend on how many draws another region consumed.
    #[must_use]
    pub fn for_stream(seed: u64, stream: u64) -> Self {
        Self::new(seed ^ splitmix64(stream.wrapping_add(0x5851_f42d_4c95_7f2d)))
    }
}

impl RandomSource for XorShift64 {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::{RandomSource, XorShift64};

    #[test]
    fn zero_seed_still_produces_bits() {
        let mut rng = XorShift64::new(0);
        assert_ne!(rng.next_u64(), 0);
    }

    #[test]
    fn streams_diverge() {
        let mut a = XorShift64::for_stream(42, 0);
        let mut b = XorShift64::for_stream(42, 1);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = XorShift64::new(3);
        for n in 1..20 {
            for _ in 0..50 {
                assert!(rng.below(n) < n);
            }
        }
        assert_eq!(rng.below(0), 0);
    }

    #[test]
    fn unit_samples_stay_in_range() {
        let mut rng = XorShift64::new(11);
        for _ in 0..1000 {
            let f = rng.next_f64();
            assert!((0.0..1.0).contains(&f), "{f} out of range");
        }
    }
}
