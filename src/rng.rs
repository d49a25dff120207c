use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand::SeedableRng;

/// Source of uniform random indices used by the draft strategies.
///
/// Everything that samples packs goes through this trait so tests can
/// substitute a scripted sequence for the seeded generator.
pub trait RandomSource {
    /// Generate a random integer in range [0, max)
    fn random_range(&mut self, max: usize) -> usize;
}

/// Seeded random number generator for reproducible simulations
#[derive(Clone)]
pub struct DraftRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DraftRng {
    /// Create a new DraftRng with an optional seed
    /// If seed is None, generates a random seed
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            use rand::thread_rng;
            thread_rng().gen()
        });

        let rng = ChaCha8Rng::seed_from_u64(seed);
        DraftRng { rng, seed }
    }

    /// Get the seed used for this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DraftRng {
    fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }
}

/// Pick `count` distinct indices from `0..len`, uniformly and without replacement.
///
/// Partial Fisher-Yates: only the first `count` slots are shuffled.
/// Caller guarantees `count <= len`.
pub fn sample_indices(rng: &mut dyn RandomSource, len: usize, count: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    for i in 0..count {
        let j = i + rng.random_range(len - i);
        indices.swap(i, j);
    }
    indices.truncate(count);
    indices
}

/// Replays a fixed list of values, wrapping each into the requested range.
#[cfg(test)]
pub struct ScriptedRng {
    values: Vec<usize>,
    next: usize,
}

#[cfg(test)]
impl ScriptedRng {
    pub fn new(values: Vec<usize>) -> Self {
        ScriptedRng { values, next: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRng {
    fn random_range(&mut self, max: usize) -> usize {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % max
    }
}
