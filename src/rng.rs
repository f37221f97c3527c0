//! Session randomness for shuffles and confetti scatter.
//!
//! The default build keeps `getrandom` out of the wasm (it stays available
//! behind the `rng` feature); a small linear congruential generator seeded
//! from `performance.now()` is enough for a six-track playlist shuffle.
//! Not crypto secure.

pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from the page clock. Returns a fixed sequence when the
    /// performance API is unavailable.
    pub fn from_now() -> Self {
        let now = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        Self::new(now.to_bits())
    }

    fn next(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        (self.state >> 16) as u32
    }

    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next() as usize % len
    }

    /// Uniform-ish draw in `[lo, hi)`.
    pub fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * (self.next() as f64 / (u32::MAX as f64 + 1.0))
    }

    /// Fisher-Yates, in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_stays_in_bounds() {
        let mut rng = Lcg::new(7);
        for _ in 0..1000 {
            assert!(rng.index(6) < 6);
        }
        assert_eq!(rng.index(0), 0);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = Lcg::new(42);
        let mut items = vec![0, 1, 2, 3, 4, 5];
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn range_respects_endpoints() {
        let mut rng = Lcg::new(9);
        for _ in 0..1000 {
            let v = rng.range_f64(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&v));
        }
    }
}
