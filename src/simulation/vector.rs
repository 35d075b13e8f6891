//! Componentwise vector arithmetic
//!
//! Wraps an `nalgebra::DVector` so the dimensionality is a property of the
//! value, not the type. Binary operators between vectors of different lengths
//! zero-pad the shorter one, so `[1, 2] + [3]` is `[4, 2]`.

use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::DVector;

use super::real::Real;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Vector<S: Real>(DVector<S>);

impl<S: Real> Vector<S> {
    pub fn from_slice(components: &[S]) -> Self {
        Self(DVector::from_vec(components.to_vec()))
    }

    /// Two-component shortcut, the only dimensionality the simulation uses
    pub fn new2(x: S, y: S) -> Self {
        Self::from_slice(&[x, y])
    }

    pub fn zeros(len: usize) -> Self {
        Self(DVector::from_element(len, S::zero()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Component `i`, or zero past the end
    pub fn get(&self, i: usize) -> S {
        self.0.get(i).copied().unwrap_or_else(S::zero)
    }

    pub fn x(&self) -> S {
        self.get(0)
    }

    pub fn y(&self) -> S {
        self.get(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> + '_ {
        self.0.iter()
    }

    /// Combine with `other` componentwise after padding both to the longer length
    fn zip_padded(&self, other: &Self, f: impl Fn(S, S) -> S) -> Self {
        let len = self.len().max(other.len());
        Self(DVector::from_vec(
            (0..len).map(|i| f(self.get(i), other.get(i))).collect(),
        ))
    }

    pub fn scale(&self, k: S) -> Self {
        Self(self.0.map(|c| c * k))
    }

    /// Divide every component by `k`
    pub fn divide(&self, k: S) -> Result<Self> {
        if k.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(self.0.map(|c| c / k)))
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> S {
        self.0
            .iter()
            .fold(S::zero(), |acc, &c| acc + c * c)
            .sqrt()
    }

    /// Sum of absolute components
    pub fn l1_norm(&self) -> S {
        self.0.iter().fold(S::zero(), |acc, &c| acc + c.abs())
    }

    /// Copy into a new vector of exactly `len` components (zero-padded or truncated)
    pub fn resized(&self, len: usize) -> Self {
        Self(DVector::from_vec((0..len).map(|i| self.get(i)).collect()))
    }
}

impl<S: Real> Add for &Vector<S> {
    type Output = Vector<S>;

    fn add(self, rhs: Self) -> Vector<S> {
        self.zip_padded(rhs, |a, b| a + b)
    }
}

impl<S: Real> Add for Vector<S> {
    type Output = Vector<S>;

    fn add(self, rhs: Self) -> Vector<S> {
        &self + &rhs
    }
}

impl<S: Real> Sub for &Vector<S> {
    type Output = Vector<S>;

    fn sub(self, rhs: Self) -> Vector<S> {
        self.zip_padded(rhs, |a, b| a - b)
    }
}

impl<S: Real> Sub for Vector<S> {
    type Output = Vector<S>;

    fn sub(self, rhs: Self) -> Vector<S> {
        &self - &rhs
    }
}

impl<S: Real> Mul<S> for &Vector<S> {
    type Output = Vector<S>;

    fn mul(self, k: S) -> Vector<S> {
        self.scale(k)
    }
}

impl<S: Real> Mul<S> for Vector<S> {
    type Output = Vector<S>;

    fn mul(self, k: S) -> Vector<S> {
        self.scale(k)
    }
}

impl<S: Real> Neg for &Vector<S> {
    type Output = Vector<S>;

    fn neg(self) -> Vector<S> {
        Vector(self.0.map(|c| -c))
    }
}

impl<S: Real> Neg for Vector<S> {
    type Output = Vector<S>;

    fn neg(self) -> Vector<S> {
        -&self
    }
}

impl<S: Real> From<[S; 2]> for Vector<S> {
    fn from(c: [S; 2]) -> Self {
        Self::from_slice(&c)
    }
}
