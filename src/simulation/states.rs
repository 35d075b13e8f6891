//! Core state types for the N-body simulation.
//!
//! - `Body`   – mass, displacement, velocity, radius and the "combinable" flag
//! - `System` – an ordered snapshot of bodies plus elapsed simulation time
//!
//! Every snapshot owns its bodies outright; stepping never mutates a snapshot
//! that has already been handed out.

use super::real::Real;
use super::vector::Vector;
use crate::configuration::config::BodyConfig;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Body<S: Real> {
    pub mass: S,
    pub displacement: Vector<S>, // position
    pub velocity: Vector<S>,
    pub radius: S,          // used for collisions and for the drawn disk
    pub combinable: bool,   // may merge with other bodies on contact
}

impl<S: Real> Body<S> {
    /// Body with radius derived from mass and merging enabled
    pub fn new(mass: S, displacement: Vector<S>, velocity: Vector<S>) -> Self {
        Self {
            radius: Self::derived_radius(mass),
            mass,
            displacement,
            velocity,
            combinable: true,
        }
    }

    /// `2 * sqrt(mass)`
    pub fn derived_radius(mass: S) -> S {
        (S::one() + S::one()) * mass.sqrt()
    }

    pub fn with_radius(mut self, radius: S) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_combinable(mut self, combinable: bool) -> Self {
        self.combinable = combinable;
        self
    }

    /// Build a body by overlaying `record` on `defaults`
    ///
    /// A missing radius is derived from the resulting mass rather than taken
    /// from the defaults. Fails when the mass is not strictly positive or any
    /// value cannot be represented in `S`.
    pub fn from_config(record: &BodyConfig, defaults: &BodyConfig) -> Result<Self> {
        let merged = record.overlay(defaults);

        let mass_f = merged.m.unwrap_or(1.0);
        if mass_f.is_nan() || mass_f <= 0.0 {
            return Err(Error::config(format!("body mass must be positive, got {mass_f}")));
        }
        let mass = real(mass_f, "m")?;

        let displacement = vector2(merged.d.as_deref().unwrap_or(&[]), "d")?;
        let velocity = vector2(merged.v.as_deref().unwrap_or(&[]), "v")?;

        let radius = match merged.radius {
            Some(r) if r < 0.0 => {
                return Err(Error::config(format!("body radius must not be negative, got {r}")))
            }
            Some(r) => real(r, "radius")?,
            None => Self::derived_radius(mass),
        };

        Ok(Self {
            mass,
            displacement,
            velocity,
            radius,
            combinable: merged.combining.unwrap_or(true),
        })
    }

    pub fn momentum(&self) -> Vector<S> {
        self.velocity.scale(self.mass)
    }
}

fn real<S: Real>(value: f64, field: &str) -> Result<S> {
    S::from_f64(value)
        .ok_or_else(|| Error::config(format!("`{field}` value {value} is not representable")))
}

/// Two-component vector from a config list; shorter lists are zero-padded
fn vector2<S: Real>(components: &[f64], field: &str) -> Result<Vector<S>> {
    if components.len() > 2 {
        return Err(Error::config(format!(
            "`{field}` has {} components, at most 2 are supported",
            components.len()
        )));
    }
    let parsed = components
        .iter()
        .map(|&c| real(c, field))
        .collect::<Result<Vec<S>>>()?;
    Ok(Vector::from_slice(&parsed).resized(2))
}

/// A simulation snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct System<S: Real> {
    pub bodies: Vec<Body<S>>, // render-stable order, no identity beyond position
    pub t: S,                 // elapsed time
}

impl<S: Real> System<S> {
    pub fn new(bodies: Vec<Body<S>>) -> Self {
        Self { bodies, t: S::zero() }
    }

    pub fn total_mass(&self) -> S {
        self.bodies.iter().fold(S::zero(), |acc, b| acc + b.mass)
    }

    pub fn total_momentum(&self) -> Vector<S> {
        self.bodies
            .iter()
            .fold(Vector::zeros(2), |acc, b| &acc + &b.momentum())
    }
}
