//! Collision merging
//!
//! Bodies that overlap closer than the smaller of their radii are fused into a
//! single body that conserves mass and momentum. The scan is done once per
//! step, in index order, against a removal mask; the list is compacted once at
//! the end so survivors keep their relative order.

use log::debug;

use super::real::Real;
use super::states::Body;

impl<S: Real> Body<S> {
    /// Merge two bodies into one
    ///
    /// mass adds, displacement and velocity are mass-weighted averages and the
    /// radius is `sqrt(r_a^2 + r_b^2)`. The result is always combinable.
    pub fn merged(&self, other: &Body<S>) -> Body<S> {
        let mass = self.mass + other.mass;
        let wa = self.mass / mass;
        let wb = other.mass / mass;

        Body {
            mass,
            displacement: &self.displacement.scale(wa) + &other.displacement.scale(wb),
            velocity: &self.velocity.scale(wa) + &other.velocity.scale(wb),
            radius: (self.radius * self.radius + other.radius * other.radius).sqrt(),
            combinable: true,
        }
    }

    /// Centre distance below the smaller radius
    pub fn overlaps(&self, other: &Body<S>) -> bool {
        let distance = (&other.displacement - &self.displacement).magnitude();
        distance < self.radius.min(other.radius)
    }
}

/// Fuse every overlapping pair of combinable bodies
///
/// A merged body keeps the slot of the earlier body and keeps scanning the
/// later ones, so a chain of overlaps collapses into one body in a single pass.
pub fn merge_collisions<S: Real>(mut bodies: Vec<Body<S>>) -> Vec<Body<S>> {
    let n = bodies.len();
    let mut removed = vec![false; n];
    let mut merges = 0usize;

    for i in 0..n {
        if removed[i] || !bodies[i].combinable {
            continue;
        }
        for j in (i + 1)..n {
            if removed[j] || !bodies[j].combinable {
                continue;
            }
            if bodies[i].overlaps(&bodies[j]) {
                let fused = bodies[i].merged(&bodies[j]);
                debug!(
                    "merging bodies {i} and {j} (mass {:?} + {:?})",
                    bodies[i].mass, bodies[j].mass
                );
                bodies[i] = fused;
                removed[j] = true;
                merges += 1;
            }
        }
    }

    if merges == 0 {
        return bodies;
    }

    bodies
        .into_iter()
        .zip(removed)
        .filter_map(|(b, gone)| (!gone).then_some(b))
        .collect()
}
