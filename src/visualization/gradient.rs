//! Piecewise-linear RGBA gradient used to tint successive frames

use crate::error::{Error, Result};

/// `(position, [r, g, b, a])`, components in `[0, 1]`
pub type Keyframe = (f64, [f64; 4]);

#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    keyframes: Vec<Keyframe>, // sorted by position
}

impl Gradient {
    pub fn new(mut keyframes: Vec<Keyframe>) -> Result<Self> {
        if keyframes.is_empty() {
            return Err(Error::config("gradient needs at least one keyframe"));
        }
        if let Some((p, _)) = keyframes.iter().find(|(p, _)| !p.is_finite()) {
            return Err(Error::config(format!("gradient position {p} is not finite")));
        }
        keyframes.sort_by(|a, b| a.0.total_cmp(&b.0));
        Ok(Self { keyframes })
    }

    /// Fades in from transparent purple, runs blue → green → red, fades out again.
    /// Every channel reaches full intensity somewhere, so a body that sits still
    /// for the whole run ends up white under a `max` pen.
    pub fn spectrum() -> Self {
        Self {
            keyframes: spectrum_keyframes(),
        }
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Color at `t`
    ///
    /// Uses the last keyframe at or before `t` (the first one when `t` precedes
    /// them all) and interpolates towards the next keyframe. Exact hits and
    /// anything past the last keyframe return a stored color unchanged.
    pub fn lookup(&self, t: f64) -> [f64; 4] {
        // linear scan; gradients are a handful of keyframes
        let mut i = 0;
        for (k, (p, _)) in self.keyframes.iter().enumerate() {
            if *p > t {
                break;
            }
            i = k;
        }

        let (p0, c0) = self.keyframes[i];
        if p0 == t || i + 1 == self.keyframes.len() {
            return c0;
        }

        let (p1, c1) = self.keyframes[i + 1];
        let balance = if p1 == p0 { 0.5 } else { (t - p0) / (p1 - p0) };

        let mut out = [0.0; 4];
        for (o, (a, b)) in out.iter_mut().zip(c0.iter().zip(c1.iter())) {
            *o = a * (1.0 - balance) + b * balance;
        }
        out
    }
}

pub fn spectrum_keyframes() -> Vec<Keyframe> {
    vec![
        (0.0 / 6.0, [0.5, 0.0, 0.5, 0.0]),
        (1.0 / 6.0, [0.0, 0.0, 1.0, 1.0]),
        (2.0 / 6.0, [0.0, 0.5, 0.5, 1.0]),
        (3.0 / 6.0, [0.0, 1.0, 0.0, 1.0]),
        (4.0 / 6.0, [0.5, 0.5, 0.0, 1.0]),
        (5.0 / 6.0, [1.0, 0.0, 0.0, 1.0]),
        (6.0 / 6.0, [0.5, 0.0, 0.5, 0.0]),
    ]
}
