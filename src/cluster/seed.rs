use rand::prelude::*;

/// Source of randomness for centroid initialization.
///
/// `Fixed` makes runs reproducible; `Entropy` (the default) draws from the
/// thread-local generator, so repeated runs may differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Seed {
    /// Deterministic generator seeded with the given value.
    Fixed(u64),
    /// Non-deterministic generator.
    #[default]
    Entropy,
}

impl Seed {
    pub(crate) fn rng(self) -> Box<dyn RngCore> {
        match self {
            Seed::Fixed(s) => Box::new(StdRng::seed_from_u64(s)),
            Seed::Entropy => Box::new(rand::rng()),
        }
    }
}

impl From<u64> for Seed {
    fn from(seed: u64) -> Self {
        Seed::Fixed(seed)
    }
}

impl From<Option<u64>> for Seed {
    fn from(seed: Option<u64>) -> Self {
        seed.map_or(Seed::Entropy, Seed::Fixed)
    }
}
