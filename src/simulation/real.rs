//! Numeric representation used by the simulation
//!
//! The integrator, vectors and bodies are generic over [`Real`], so a scenario
//! can run either in plain `f64` or in [`SaturatingDecimal`] (28 significant
//! digits). The choice is made once, when the scenario is built.
//!
//! No `Real` operation panics. `f64` overflows to infinity; the decimal type
//! clamps to `Decimal::MAX` / `Decimal::MIN` instead of panicking the way the
//! plain `rust_decimal` operators do.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

use rust_decimal::prelude::*;
use serde::Deserialize;

/// Scalar type the physics runs in
pub trait Real:
    Copy
    + Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;

    /// `None` when `value` is not representable (NaN, infinities, out of range)
    fn from_f64(value: f64) -> Option<Self>;
    fn to_f64(self) -> f64;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;

    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    fn min(self, other: Self) -> Self {
        if other < self { other } else { self }
    }
}

impl Real for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }

    fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then_some(value)
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    fn abs(self) -> Self {
        f64::abs(self)
    }
}

/// `rust_decimal::Decimal` with saturating arithmetic
///
/// Results past the representable range clamp to `Decimal::MAX` or
/// `Decimal::MIN`; division by zero clamps by the sign of the dividend, and
/// `0 / 0` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SaturatingDecimal(pub Decimal);

impl SaturatingDecimal {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const ONE: Self = Self(Decimal::ONE);
    pub const MAX: Self = Self(Decimal::MAX);
    pub const MIN: Self = Self(Decimal::MIN);

    pub fn into_inner(self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for SaturatingDecimal {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for SaturatingDecimal {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl Add for SaturatingDecimal {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for SaturatingDecimal {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl Mul for SaturatingDecimal {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0.saturating_mul(rhs.0))
    }
}

impl Div for SaturatingDecimal {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        match self.0.checked_div(rhs.0) {
            Some(q) => Self(q),
            None if self.0.is_zero() => Self::ZERO,
            None if self.0.is_sign_negative() != rhs.0.is_sign_negative() => Self::MIN,
            None => Self::MAX,
        }
    }
}

impl Neg for SaturatingDecimal {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Real for SaturatingDecimal {
    fn zero() -> Self {
        Self::ZERO
    }

    fn one() -> Self {
        Self::ONE
    }

    fn from_f64(value: f64) -> Option<Self> {
        <Decimal as FromPrimitive>::from_f64(value).map(Self)
    }

    fn to_f64(self) -> f64 {
        <Decimal as ToPrimitive>::to_f64(&self.0).unwrap_or(f64::NAN)
    }

    // only ever called on magnitudes and squared radii, which are never negative
    fn sqrt(self) -> Self {
        Self(MathematicalOps::sqrt(&self.0).unwrap_or(Decimal::ZERO))
    }

    fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

/// Which [`Real`] a scenario runs in
/// `precision: "float"` or `precision: "decimal"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    #[serde(rename = "float")] // f64
    #[default]
    Float,

    #[serde(rename = "decimal")] // SaturatingDecimal
    Decimal,
}
