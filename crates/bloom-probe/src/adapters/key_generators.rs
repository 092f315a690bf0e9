//! Key generator adapters
//!
//! Keys are hyphenated UUID strings. `UuidKeyGenerator` draws from the OS
//! RNG; `SeededKeyGenerator` derives the UUID bytes from a seeded `StdRng`
//! so a run can be reproduced exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::{Builder, Uuid};

use crate::ports::outbound::KeyGenerator;

/// Random v4 UUID keys
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidKeyGenerator;

impl UuidKeyGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl KeyGenerator for UuidKeyGenerator {
    fn next_key(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Reproducible v4 UUID keys from a fixed seed
#[derive(Clone, Debug)]
pub struct SeededKeyGenerator {
    rng: StdRng,
}

impl SeededKeyGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl KeyGenerator for SeededKeyGenerator {
    fn next_key(&mut self) -> String {
        let bytes: [u8; 16] = self.rng.gen();
        Builder::from_random_bytes(bytes).into_uuid().to_string()
    }
}

/// Key generator selected at startup
#[derive(Clone, Debug)]
pub enum KeySource {
    Random(UuidKeyGenerator),
    Seeded(SeededKeyGenerator),
}

impl KeySource {
    /// Seeded source when a seed is given, random otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => KeySource::Seeded(SeededKeyGenerator::new(seed)),
            None => KeySource::Random(UuidKeyGenerator::new()),
        }
    }
}

impl KeyGenerator for KeySource {
    fn next_key(&mut self) -> String {
        match self {
            KeySource::Random(generator) => generator.next_key(),
            KeySource::Seeded(generator) => generator.next_key(),
        }
    }
}
