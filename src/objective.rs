//! # Objective
//!
//! The `Objective` trait is the one capability the optimizer needs from its
//! caller: turning a point into a score. Lower scores are better.
//!
//! Any `Fn(&[f64]) -> f64` closure is an objective. Closures that can fail are
//! adapted with [`fallible`], and their errors reach the caller unchanged.
//!
//! ## Example
//!
//! ```rust
//! use bwo::objective::{fallible, Objective};
//!
//! let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
//! assert_eq!(sphere.evaluate(&[1.0, 2.0]).unwrap(), 5.0);
//!
//! let checked = fallible(|x: &[f64]| {
//!     if x.is_empty() {
//!         Err("empty point")
//!     } else {
//!         Ok(x[0])
//!     }
//! });
//! assert!(checked.evaluate(&[]).is_err());
//! ```

use std::fmt;

use crate::error::{BoxedError, OptimizerError, Result};

/// A scalar function to minimize.
pub trait Objective {
    /// Scores `point`. Implementations should be pure.
    fn evaluate(&self, point: &[f64]) -> Result<f64>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, point: &[f64]) -> Result<f64> {
        Ok(self(point))
    }
}

/// Adapter for objectives that report their own errors.
#[derive(Clone)]
pub struct Fallible<F> {
    function: F,
}

impl<F> fmt::Debug for Fallible<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fallible").finish_non_exhaustive()
    }
}

/// Wraps a closure returning `Result<f64, E>` as an [`Objective`].
///
/// An `Err` from the closure aborts the run as [`OptimizerError::Objective`].
pub fn fallible<F, E>(function: F) -> Fallible<F>
where
    F: Fn(&[f64]) -> std::result::Result<f64, E>,
    E: Into<BoxedError>,
{
    Fallible { function }
}

impl<F, E> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> std::result::Result<f64, E>,
    E: Into<BoxedError>,
{
    fn evaluate(&self, point: &[f64]) -> Result<f64> {
        (self.function)(point).map_err(OptimizerError::objective)
    }
}

/// Weighted cost of a network configuration.
///
/// Points are read as `[bandwidth, cost, latency]`. The score rewards
/// bandwidth and penalises cost and latency:
/// `cost_weight * cost + latency_weight * latency - bandwidth_weight * bandwidth`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkCost {
    pub bandwidth_weight: f64,
    pub cost_weight: f64,
    pub latency_weight: f64,
}

impl NetworkCost {
    /// Number of coordinates a point must carry.
    pub const DIMENSIONS: usize = 3;

    pub fn new(bandwidth_weight: f64, cost_weight: f64, latency_weight: f64) -> Self {
        Self {
            bandwidth_weight,
            cost_weight,
            latency_weight,
        }
    }
}

impl Default for NetworkCost {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl Objective for NetworkCost {
    fn evaluate(&self, point: &[f64]) -> Result<f64> {
        let [bandwidth, cost, latency] = point else {
            return Err(OptimizerError::InvalidInput(format!(
                "NetworkCost expects {} coordinates, got {}",
                Self::DIMENSIONS,
                point.len()
            )));
        };

        Ok(self.cost_weight * cost + self.latency_weight * latency
            - self.bandwidth_weight * bandwidth)
    }
}
