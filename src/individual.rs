//! # Individual
//!
//! An `Individual` is one candidate point in the D-dimensional search space. It
//! has no identity of its own: the population that holds it pairs it with a
//! fitness value by position.
//!
//! ## Example
//!
//! ```rust
//! use bwo::individual::Individual;
//!
//! let left = Individual::new(vec![1.0, 2.0, 3.0]);
//! let right = Individual::new(vec![7.0, 8.0, 9.0]);
//!
//! let child = left.crossover_at(&right, 1).unwrap();
//! assert_eq!(child.genes(), &[1.0, 8.0, 9.0]);
//! ```

use std::ops::Index;

use crate::{
    error::{OptimizerError, Result},
    rng::RandomNumberGenerator,
};

/// A point in the search space.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genes: Vec<f64>,
}

impl Individual {
    pub fn new(genes: Vec<f64>) -> Self {
        Self { genes }
    }

    /// Draws a point with every coordinate uniform in `[lower, upper]`.
    pub fn random(
        dimensions: usize,
        lower: f64,
        upper: f64,
        rng: &mut RandomNumberGenerator,
    ) -> Self {
        Self {
            genes: rng.fetch_uniform(lower, upper, dimensions).into(),
        }
    }

    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    pub fn dimensions(&self) -> usize {
        self.genes.len()
    }

    pub fn into_genes(self) -> Vec<f64> {
        self.genes
    }

    /// Single-point crossover.
    ///
    /// The child takes coordinates `[0, point)` from `self` and `[point, D)`
    /// from `other`. A `point` of zero copies `other` entirely.
    ///
    /// # Errors
    ///
    /// Returns `OptimizerError::InvalidInput` if the parents differ in
    /// dimensionality or `point` exceeds it.
    pub fn crossover_at(&self, other: &Self, point: usize) -> Result<Self> {
        if self.genes.len() != other.genes.len() {
            return Err(OptimizerError::InvalidInput(format!(
                "Crossover parents must share dimensionality, got {} and {}",
                self.genes.len(),
                other.genes.len()
            )));
        }
        if point > self.genes.len() {
            return Err(OptimizerError::InvalidInput(format!(
                "Crossover point {} is out of range for {} dimensions",
                point,
                self.genes.len()
            )));
        }

        let mut genes = Vec::with_capacity(self.genes.len());
        genes.extend_from_slice(&self.genes[..point]);
        genes.extend_from_slice(&other.genes[point..]);
        Ok(Self { genes })
    }

    /// Adds an independent perturbation drawn uniformly from
    /// `[-magnitude, magnitude]` to every coordinate.
    pub fn perturb(&mut self, magnitude: f64, rng: &mut RandomNumberGenerator) {
        for gene in self.genes.iter_mut() {
            *gene += rng.gen_range(-magnitude..=magnitude);
        }
    }
}

impl From<Vec<f64>> for Individual {
    fn from(genes: Vec<f64>) -> Self {
        Self::new(genes)
    }
}

impl AsRef<[f64]> for Individual {
    fn as_ref(&self) -> &[f64] {
        &self.genes
    }
}

impl Index<usize> for Individual {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.genes[index]
    }
}
