//! Acceleration contributors for the n-body engine
//!
//! Each term implements [`Acceleration`]; an [`AccelSet`] sums the terms into
//! one acceleration per body. All terms read the same immutable snapshot, so
//! the order in which pairs are visited never changes the result.

use serde::Deserialize;

use super::real::Real;
use super::states::Body;
use super::vector::Vector;

/// Pairs closer than this feel no force at all
pub const SINGULARITY_GUARD: f64 = 0.5;

/// How the scalar pair force is split onto the x/y axes
/// `projection: "l1"` or `projection: "euclidean"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// `(dx, dy) / (|dx| + |dy|)`: points along `d` but is shorter than a unit
    /// vector by `|d| / (|dx| + |dy|)` everywhere off the axes
    #[serde(rename = "l1")]
    #[default]
    L1,

    /// `(dx, dy) / |d|`, the physically correct direction
    #[serde(rename = "euclidean")]
    Euclidean,
}

/// Collection of acceleration terms
pub struct AccelSet<S: Real> {
    terms: Vec<Box<dyn Acceleration<S> + Send + Sync>>,
}

impl<S: Real> Default for AccelSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Real> AccelSet<S> {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration<S> + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Total accelerations for every body of `bodies`
    /// `out[i]` is overwritten with the sum of all terms
    pub fn accumulate_accels(&self, bodies: &[Body<S>], out: &mut [Vector<S>]) {
        for a in out.iter_mut() {
            *a = Vector::zeros(2);
        }
        for term in &self.terms {
            term.acceleration(bodies, out);
        }
    }
}

/// An acceleration source; adds its contribution into `out[i]` for each body
pub trait Acceleration<S: Real> {
    fn acceleration(&self, bodies: &[Body<S>], out: &mut [Vector<S>]);
}

/// Pairwise Newtonian attraction with a hard cutoff below [`SINGULARITY_GUARD`]
///
/// The pair force is `G * m_i * m_j / |d|^2`; the velocity change of each body
/// is that force over its own mass, which is written here as `G * m_other / |d|^2`
/// so a zero-mass body never divides by zero.
pub struct Gravity<S: Real> {
    pub g: S,
    pub projection: Projection,
    guard: S,
}

impl<S: Real> Gravity<S> {
    pub fn new(g: S, projection: Projection) -> Self {
        Self {
            g,
            projection,
            guard: S::from_f64(SINGULARITY_GUARD).unwrap_or_else(S::one),
        }
    }

    /// Unit-ish direction the scalar force is spread along
    fn portions(&self, d: &Vector<S>, distance: S) -> Vector<S> {
        let norm = match self.projection {
            Projection::L1 => d.l1_norm(),
            Projection::Euclidean => distance,
        };
        // norm > 0 because distance > guard
        Vector::new2(d.x() / norm, d.y() / norm)
    }
}

impl<S: Real> Acceleration<S> for Gravity<S> {
    fn acceleration(&self, bodies: &[Body<S>], out: &mut [Vector<S>]) {
        let n = bodies.len();

        // Each unordered pair once; i is pulled along +d, j along -d
        for i in 0..n {
            let bi = &bodies[i];
            for j in (i + 1)..n {
                let bj = &bodies[j];

                let d = &bj.displacement - &bi.displacement;
                let distance = d.magnitude();
                if distance <= self.guard {
                    continue;
                }

                let inv_r2 = S::one() / (distance * distance);
                let portions = self.portions(&d, distance);

                out[i] = &out[i] + &portions.scale(self.g * bj.mass * inv_r2);
                out[j] = &out[j] - &portions.scale(self.g * bi.mass * inv_r2);
            }
        }
    }
}
