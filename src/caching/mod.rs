//! # Caching Module
//!
//! Memoization of objective evaluations. Cannibalism copies ranked parents
//! verbatim into the next generation, and crossover of identical parents
//! reproduces an already-scored point, so expensive objectives see repeats.
//!
//! Points are keyed by the exact bit pattern of their coordinates: only points
//! that are identical down to the last bit share a cache entry.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::objective::Objective;

type CacheMap = HashMap<Vec<u64>, f64>;

/// Builds the cache key for a point.
pub fn cache_key(point: &[f64]) -> Vec<u64> {
    point.iter().map(|coordinate| coordinate.to_bits()).collect()
}

/// A wrapper around an objective that caches successful evaluations.
///
/// Clones share the same cache. Failed evaluations are not cached.
#[derive(Debug, Clone)]
pub struct CachedObjective<O>
where
    O: Objective,
{
    /// The wrapped objective
    objective: O,
    /// Scores by point bit pattern
    cache: Arc<Mutex<CacheMap>>,
}

impl<O> CachedObjective<O>
where
    O: Objective,
{
    /// Creates a new cached objective wrapping the given objective.
    pub fn new(objective: O) -> Self {
        Self {
            objective,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Returns a reference to the wrapped objective.
    pub fn inner(&self) -> &O {
        &self.objective
    }

    /// Returns the number of cached evaluations.
    pub fn cache_size(&self) -> usize {
        self.lock().len()
    }

    /// Clears the cache.
    pub fn clear_cache(&self) {
        self.lock().clear();
    }

    // A poisoned lock only means another thread panicked mid-insert; the map
    // itself is still a valid set of scores.
    fn lock(&self) -> MutexGuard<'_, CacheMap> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<O> Objective for CachedObjective<O>
where
    O: Objective,
{
    fn evaluate(&self, point: &[f64]) -> Result<f64> {
        let key = cache_key(point);

        if let Some(score) = self.lock().get(&key) {
            return Ok(*score);
        }

        // Evaluate without holding the lock so a slow objective does not
        // block other clones.
        let score = self.objective.evaluate(point)?;
        self.lock().insert(key, score);

        Ok(score)
    }
}
