//! Injectable sources of nondeterminism: angular jitter and id allocation.
//!
//! The engine holds no hidden global state. Both the angle perturbation and
//! the identifier of every derived layer come from values passed in at
//! construction, so a store built with seeded sources replays exactly.

use crate::NodeId;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Produces unit jitter samples in [-1, 1].
///
/// The engine scales each sample by `jitter_bound × mutation_degree`.
pub trait JitterSource: Send + Sync {
    fn sample(&mut self) -> f64;
}

/// Uniform jitter from a `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomJitter {
    rng: StdRng,
}

impl RandomJitter {
    /// Reproducible jitter.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Jitter seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl JitterSource for RandomJitter {
    fn sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }
}

/// Always returns the same sample. `FixedJitter(0.0)` disables drift.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedJitter(pub f64);

impl JitterSource for FixedJitter {
    fn sample(&mut self) -> f64 {
        self.0.clamp(-1.0, 1.0)
    }
}

/// Everything an allocator may use to mint an id.
#[derive(Debug, Clone, Copy)]
pub struct IdRequest<'a> {
    /// Parent of the layer being created.
    pub parent: &'a NodeId,
    /// Content of the layer being created.
    pub content: &'a str,
    /// Store population at the time of the request. Monotonic, since
    /// nodes are never removed.
    pub ordinal: u64,
}

/// Mints identifiers for derived layers.
///
/// The engine still checks every id against the store; a collision surfaces
/// as [`Error::DuplicateId`](crate::Error::DuplicateId) and nothing is written.
pub trait IdAllocator: Send + Sync {
    fn allocate(&mut self, request: &IdRequest<'_>) -> NodeId;
}

/// `node_00000006`, `node_00000007`, ... keyed on the store population.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIds;

impl IdAllocator for SequentialIds {
    fn allocate(&mut self, request: &IdRequest<'_>) -> NodeId {
        NodeId::new(format!("node_{:08}", request.ordinal))
    }
}

/// Content-addressed ids: Blake3 over parent, content and ordinal.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedIds;

impl HashedIds {
    /// Hex characters kept from the digest.
    pub const DIGEST_CHARS: usize = 16;
}

impl IdAllocator for HashedIds {
    fn allocate(&mut self, request: &IdRequest<'_>) -> NodeId {
        let mut hasher = blake3::Hasher::new();
        hasher.update(request.parent.as_str().as_bytes());
        hasher.update(b":");
        hasher.update(request.content.as_bytes());
        hasher.update(b":");
        hasher.update(&request.ordinal.to_be_bytes());
        let digest = hex::encode(hasher.finalize().as_bytes());
        NodeId::new(format!("node_{}", &digest[..Self::DIGEST_CHARS]))
    }
}

/// Random `node_xxxxxxxx` ids from a `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl IdAllocator for RandomIds {
    fn allocate(&mut self, _request: &IdRequest<'_>) -> NodeId {
        let mut bytes = [0u8; 4];
        self.rng.fill_bytes(&mut bytes);
        NodeId::new(format!("node_{}", hex::encode(bytes)))
    }
}
