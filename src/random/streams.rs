use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// The two random sources used by one generation run.
///
/// - the *scalar* stream serves discrete choices and per-layer parameters
///   (palette HSV draws, centers, radii, color picks, alpha);
/// - the *vector* stream serves per-point arrays (blob radius multipliers, petal jitter).
///
/// Both are derived from the same integer seed, so a run is reproducible bit-for-bit
/// given the seed and the sequence of calls. The streams are an owned value: callers
/// thread `&mut RandomStreams` through every generator instead of touching global state.
#[derive(Clone, Debug)]
pub struct RandomStreams {
    seed: u64,
    scalar: StdRng,
    vector: StdRng,
}

impl RandomStreams {
    /// Seed both streams from `seed`.
    pub fn seed_all(seed: u64) -> Self {
        Self {
            seed,
            scalar: StdRng::seed_from_u64(seed),
            vector: StdRng::seed_from_u64(split_mix64(seed)),
        }
    }

    /// Re-initialize both streams in place, as if freshly built from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::seed_all(seed);
    }

    /// The seed both streams were derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `[0, 1)` from the scalar stream.
    pub fn unit(&mut self) -> f64 {
        unit_from_u64(self.scalar.next_u64())
    }

    /// Uniform draw in `[lo, hi)` from the scalar stream.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }

    /// Uniform integer in `[lo, hi]` (inclusive) from the scalar stream.
    ///
    /// Returns `lo` when `hi <= lo`.
    pub fn randint(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        let n = u64::from(hi - lo) + 1;
        let pick = ((self.unit() * n as f64) as u64).min(n - 1);
        lo + pick as u32
    }

    /// Uniform index in `[0, n)`, or `None` when `n == 0`.
    pub fn choose_index(&mut self, n: usize) -> Option<usize> {
        if n == 0 {
            return None;
        }
        let pick = (self.unit() * n as f64) as usize;
        Some(pick.min(n - 1))
    }

    /// Uniform choice from `items`, or `None` when empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.choose_index(items.len()).map(|i| &items[i])
    }

    /// `n` uniform draws in `[0, 1)` from the vector stream.
    pub fn unit_array(&mut self, n: usize) -> Vec<f64> {
        (0..n)
            .map(|_| unit_from_u64(self.vector.next_u64()))
            .collect()
    }

    /// `n` Gaussian draws with the given mean and standard deviation from the vector
    /// stream (Box-Muller, both values of each pair are used).
    pub fn normal_array(&mut self, n: usize, mean: f64, std_dev: f64) -> Vec<f64> {
        let mut out = Vec::with_capacity(n);
        while out.len() < n {
            let (z0, z1) = self.box_muller_pair();
            out.push(mean + std_dev * z0);
            if out.len() < n {
                out.push(mean + std_dev * z1);
            }
        }
        out
    }

    fn box_muller_pair(&mut self) -> (f64, f64) {
        // u1 in (0, 1] keeps ln() finite.
        let u1 = 1.0 - unit_from_u64(self.vector.next_u64());
        let u2 = unit_from_u64(self.vector.next_u64());
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = std::f64::consts::TAU * u2;
        (r * theta.cos(), r * theta.sin())
    }
}

/// 53 bits of precision, strictly below 1.0.
fn unit_from_u64(v: u64) -> f64 {
    ((v >> 11) as f64) * (1.0 / ((1u64 << 53) as f64))
}

fn split_mix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
#[path = "../../tests/unit/random/streams.rs"]
mod tests;
