//! Build fully-validated runtime scenarios from configuration
//!
//! Takes a [`ScenarioConfig`] and produces a [`Scenario`] holding:
//! - the initial system (bodies at t = 0)
//! - the integrator constants (`G`, per-step `dt`, merging, projection)
//! - the render settings (view, frame count, pen, pixel format, gradient)
//!
//! Every configuration problem is reported here, before any stepping or
//! drawing happens.

use log::info;

use super::integrator::Integrator;
use super::real::Real;
use super::states::{Body, System};
use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::error::{Error, Result};
use crate::simulation::forces::Projection;
use crate::visualization::canvas::{Canvas, Pen, PixelFormat};
use crate::visualization::gradient::Gradient;
use crate::visualization::render::View;

pub struct Scenario<S: Real> {
    pub system: System<S>,
    pub g: S,
    pub step_dt: S, // time per frame
    pub merging: bool,
    pub projection: Projection,
    pub frames: usize,
    pub view: View,
    pub pen: Pen,
    pub format: PixelFormat,
    pub gradient: Gradient,
}

impl<S: Real> Scenario<S> {
    pub fn build_scenario(cfg: &ScenarioConfig) -> Result<Self> {
        let [w, h] = cfg.dimensions;
        if w <= 0 || h <= 0 {
            return Err(Error::config(format!("dimensions must be positive, got [{w}, {h}]")));
        }
        if cfg.frames <= 0 {
            return Err(Error::config(format!("frames must be positive, got {}", cfg.frames)));
        }
        if !cfg.zoom.is_finite() || cfg.zoom <= 0.0 {
            return Err(Error::config(format!("zoom must be positive, got {}", cfg.zoom)));
        }
        if !cfg.centre.iter().all(|c| c.is_finite()) {
            return Err(Error::config("centre must be finite"));
        }
        if !cfg.dt.is_finite() || cfg.dt <= 0.0 {
            return Err(Error::config(format!("dt must be positive, got {}", cfg.dt)));
        }
        let frames = cfg.frames as usize;

        // the first frame is the initial state, so frames - 1 steps span dt
        let step_dt = if frames > 1 { cfg.dt / (frames - 1) as f64 } else { cfg.dt };
        let step_dt = S::from_f64(step_dt)
            .ok_or_else(|| Error::config(format!("dt {} is not representable", cfg.dt)))?;
        let g = S::from_f64(cfg.g).ok_or_else(|| Error::config(format!("G {} is not representable", cfg.g)))?;

        let defaults = BodyConfig::defaults();
        let bodies = cfg
            .objects
            .iter()
            .enumerate()
            .map(|(i, rec)| {
                Body::<S>::from_config(rec, &defaults).map_err(|e| match e {
                    Error::Configuration(msg) => Error::config(format!("object {i}: {msg}")),
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let gradient = match &cfg.gradient {
            Some(keyframes) => Gradient::new(keyframes.clone())?,
            None => Gradient::spectrum(),
        };

        info!("loaded {} bodies, {} frames, step {:?}", bodies.len(), frames, step_dt);

        Ok(Self {
            system: System::new(bodies),
            g,
            step_dt,
            merging: cfg.merging,
            projection: cfg.projection,
            frames,
            view: View {
                width: w as usize,
                height: h as usize,
                centre: cfg.centre,
                zoom: cfg.zoom,
            },
            pen: cfg.pen,
            format: if cfg.alpha { PixelFormat::Rgba } else { PixelFormat::Rgb },
            gradient,
        })
    }

    /// Integrator starting from the initial system
    pub fn integrator(&self) -> Result<Integrator<S>> {
        Ok(
            Integrator::with_projection(self.system.clone(), self.g, self.step_dt, self.projection)?
                .merging(self.merging),
        )
    }

    /// Initial state followed by every stepped state, endless
    pub fn frames(&self) -> Result<impl Iterator<Item = System<S>>> {
        let integrator = self.integrator()?;
        Ok(std::iter::once(self.system.clone()).chain(integrator))
    }

    /// Black canvas with the configured size, pen and format
    pub fn canvas(&self) -> Result<Canvas> {
        Canvas::new(self.view.width, self.view.height, self.format, &[0, 0, 0, 0], self.pen)
    }
}
