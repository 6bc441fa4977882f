//! Per-section random sampling.
//!
//! With `--sample N`, each section shows at most `N` files drawn without
//! replacement. One generator is shared by all sections of a run, in order,
//! so a fixed seed and fixed inputs always pick the same subsets.
//!
//! The generator is PCG32. Seeds are not compatible with other tools that
//! produced pages from the same folders; only self-consistency is promised.

use crate::types::{AudioFile, sort_by_name};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use tracing::debug;

pub struct Sampler {
    limit: Option<usize>,
    rng: Pcg32,
}

impl Sampler {
    /// Build a sampler. Without a seed the generator is seeded from OS entropy.
    pub fn new(limit: Option<usize>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => Pcg32::seed_from_u64(seed),
            None => Pcg32::from_entropy(),
        };
        Self { limit, rng }
    }

    /// Reduce `files` to at most `limit` entries, re-sorted by name.
    ///
    /// Lists already within the limit are returned untouched and consume no
    /// randomness.
    pub fn sample(&mut self, files: Vec<AudioFile>) -> Vec<AudioFile> {
        let Some(limit) = self.limit else {
            return files;
        };
        if files.len() <= limit {
            return files;
        }
        let mut picked: Vec<AudioFile> = files
            .choose_multiple(&mut self.rng, limit)
            .cloned()
            .collect();
        sort_by_name(&mut picked);
        debug!(from = files.len(), kept = picked.len(), "sampled section");
        picked
    }
}
