//! Stable snapshot hashing for deterministic verification.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::Session;

impl Session {
    /// xxh3 fingerprint of the observable generation state. Two sessions
    /// with the same seed and dimensions hash identically at every matching
    /// point in their runs.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_i32(self.current.x);
        hasher.write_i32(self.current.y);
        hasher.write_u64(self.visited.count() as u64);
        hasher.write_u64(self.path.len() as u64);
        hasher.write_u64(self.backtracked.len() as u64);
        hasher.write(&self.grid.canonical_bytes());
        hasher.finish()
    }
}
