//! Fixed-step integrator for the N-body system
//!
//! One step, from a snapshot:
//! 1. accumulate pairwise accelerations from the snapshot positions
//! 2. kick: `v += a * dt` for every body
//! 3. drift: `x += v * dt` with the kicked velocities
//! 4. merge overlapping combinable bodies
//!
//! [`Integrator`] is an endless iterator over successive snapshots. It can be
//! restarted from any snapshot it produced by building a new one from it.

use log::trace;

use super::collisions::merge_collisions;
use super::forces::{AccelSet, Gravity, Projection};
use super::real::Real;
use super::states::{Body, System};
use super::vector::Vector;
use crate::error::{Error, Result};

/// Advance `sys` by one step of length `dt`, returning a new snapshot
pub fn step<S: Real>(sys: &System<S>, forces: &AccelSet<S>, dt: S, merging: bool) -> System<S> {
    let n = sys.bodies.len();

    let mut accels = vec![Vector::zeros(2); n];
    forces.accumulate_accels(&sys.bodies, &mut accels);

    let moved: Vec<Body<S>> = sys
        .bodies
        .iter()
        .zip(accels.iter())
        .map(|(b, a)| {
            let velocity = &b.velocity + &a.scale(dt);
            let displacement = &b.displacement + &velocity.scale(dt);
            Body {
                mass: b.mass,
                displacement,
                velocity,
                radius: b.radius,
                combinable: b.combinable,
            }
        })
        .collect();

    let bodies = if merging { merge_collisions(moved) } else { moved };

    System {
        bodies,
        t: sys.t + dt,
    }
}

/// Lazy, unbounded sequence of snapshots
pub struct Integrator<S: Real> {
    current: System<S>,
    forces: AccelSet<S>,
    dt: S,
    merging: bool,
    steps: u64,
}

impl<S: Real> Integrator<S> {
    /// Fails when `g` is not finite or `dt` is not a finite positive number
    pub fn new(initial: System<S>, g: S, dt: S) -> Result<Self> {
        Self::with_projection(initial, g, dt, Projection::L1)
    }

    pub fn with_projection(initial: System<S>, g: S, dt: S, projection: Projection) -> Result<Self> {
        if !g.to_f64().is_finite() {
            return Err(Error::config(format!("G must be finite, got {g:?}")));
        }
        if !dt.to_f64().is_finite() || dt <= S::zero() {
            return Err(Error::config(format!("time step must be positive, got {dt:?}")));
        }

        Ok(Self {
            current: initial,
            forces: AccelSet::new().with(Gravity::new(g, projection)),
            dt,
            merging: true,
            steps: 0,
        })
    }

    /// Turn collision merging on or off
    pub fn merging(mut self, enabled: bool) -> Self {
        self.merging = enabled;
        self
    }

    /// The most recent snapshot (the initial one before the first step)
    pub fn current(&self) -> &System<S> {
        &self.current
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl<S: Real> Iterator for Integrator<S> {
    type Item = System<S>;

    fn next(&mut self) -> Option<System<S>> {
        let next = step(&self.current, &self.forces, self.dt, self.merging);
        self.steps += 1;
        trace!("step {}: {} bodies", self.steps, next.bodies.len());

        // the caller gets its own copy; later steps never touch it
        self.current = next.clone();
        Some(next)
    }
}
