//! Configuration types for loading simulation scenarios from JSON or YAML.
//!
//! A scenario is a single flat record; every key is optional and falls back
//! to the defaults documented on [`ScenarioConfig`]. Body records are overlaid
//! on [`BodyConfig::defaults`] when the runtime scenario is built.
//!
//! # JSON format
//! ```json
//! {
//!   "dimensions": [512, 512],
//!   "G": 1,
//!   "dt": 600,
//!   "frames": 301,
//!   "centre": [0, 0],
//!   "zoom": 1,
//!   "objects": [
//!     { "m": 100, "comment": "sun" },
//!     { "m": 1, "d": [100, 0], "v": [0, 1], "radius": 2, "combining": false }
//!   ]
//! }
//! ```
//!
//! The same keys are accepted from YAML when the input path ends in `.yaml`/`.yml`.

use std::io::Read;

use serde::Deserialize;

use crate::error::Result;
use crate::simulation::forces::Projection;
use crate::simulation::real::Precision;
use crate::visualization::canvas::Pen;
use crate::visualization::gradient::Keyframe;

/// Input document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Guess from a file name; anything that is not `.yaml`/`.yml` is JSON
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".yaml") || lower.ends_with(".yml") {
            Self::Yaml
        } else {
            Self::Json
        }
    }
}

/// Initial state of one body, as written in the scenario
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub m: Option<f64>,           // mass
    pub d: Option<Vec<f64>>,      // displacement
    pub v: Option<Vec<f64>>,      // velocity
    pub radius: Option<f64>,      // derived as 2*sqrt(m) when absent
    pub combining: Option<bool>,  // may merge on collision
    pub comment: Option<String>,  // ignored
}

impl BodyConfig {
    /// `m=1, d=[0,0], v=[0,0], combining=true`, radius left to be derived
    pub fn defaults() -> Self {
        Self {
            m: Some(1.0),
            d: Some(vec![0.0, 0.0]),
            v: Some(vec![0.0, 0.0]),
            radius: None,
            combining: Some(true),
            comment: None,
        }
    }

    /// Fields set on `self` win, the rest come from a copy of `defaults`
    pub fn overlay(&self, defaults: &BodyConfig) -> BodyConfig {
        let base = defaults.clone();
        BodyConfig {
            m: self.m.or(base.m),
            d: self.d.clone().or(base.d),
            v: self.v.clone().or(base.v),
            radius: self.radius.or(base.radius),
            combining: self.combining.or(base.combining),
            comment: self.comment.clone().or(base.comment),
        }
    }
}

/// Top-level scenario configuration
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ScenarioConfig {
    pub dimensions: [i64; 2], // output image size in pixels
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    pub dt: f64,     // total simulated time across all frames
    pub frames: i64, // number of frames drawn; the first one is the initial state
    pub centre: [f64; 2], // world point drawn at the middle of the image
    pub zoom: f64,   // pixels per world unit
    pub objects: Vec<BodyConfig>,

    pub merging: bool,          // global switch for collision merging
    pub projection: Projection, // how the force magnitude is split onto the axes
    pub precision: Precision,   // f64 or decimal arithmetic
    pub pen: Pen,               // blend strategy for the canvas
    pub alpha: bool,            // 32-bit RGBA output instead of 24-bit RGB
    pub stars: usize,           // background star count, 0 disables the background
    pub seed: Option<u64>,      // star field seed, entropy when absent
    pub gradient: Option<Vec<Keyframe>>, // frame tint, the default spectrum when absent
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            dimensions: [256, 256],
            g: 6.67428e-11,
            dt: 1.0,
            frames: 100,
            centre: [0.0, 0.0],
            zoom: 1.0,
            objects: Vec::new(),
            merging: true,
            projection: Projection::default(),
            precision: Precision::default(),
            pen: Pen::Max,
            alpha: false,
            stars: 100,
            seed: None,
            gradient: None,
        }
    }
}

impl ScenarioConfig {
    /// Parse a scenario document; missing keys take their defaults
    pub fn from_reader<R: Read>(reader: R, format: ConfigFormat) -> Result<Self> {
        let cfg = match format {
            ConfigFormat::Json => serde_json::from_reader(reader)?,
            ConfigFormat::Yaml => serde_yaml::from_reader(reader)?,
        };
        Ok(cfg)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }
}
