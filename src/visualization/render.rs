//! Frame compositor
//!
//! Draws every body of every frame onto one persistent canvas, tinting each
//! frame from a [`Gradient`]. World coordinates are mapped to pixels through a
//! [`View`]: `centre` lands on the middle of the image, `zoom` scales, and the
//! vertical axis is flipped so +y points up in the picture.

use log::{debug, info};

use super::canvas::{Canvas, ColorDomain};
use super::gradient::Gradient;
use crate::simulation::real::Real;
use crate::simulation::states::System;

/// Fills the canvas before any frame is drawn
pub trait BackgroundFill {
    fn fill(&mut self, canvas: &mut Canvas);
}

impl<F: FnMut(&mut Canvas)> BackgroundFill for F {
    fn fill(&mut self, canvas: &mut Canvas) {
        self(canvas)
    }
}

/// World → screen mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub width: usize,
    pub height: usize,
    pub centre: [f64; 2],
    pub zoom: f64,
}

impl View {
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        let sx = (x - self.centre[0]) * self.zoom + self.width as f64 / 2.0;
        let sy = self.height as f64 / 2.0 - (y - self.centre[1]) * self.zoom;
        (sx, sy)
    }

    pub fn scale(&self, length: f64) -> f64 {
        length * self.zoom
    }
}

/// Gradient parameter for frame `f` of `frames`
pub fn frame_position(f: usize, frames: usize) -> f64 {
    if frames > 1 {
        f as f64 / (frames - 1) as f64
    } else {
        0.5
    }
}

/// Draw one snapshot with the given tint
pub fn draw_frame<S: Real>(canvas: &mut Canvas, view: &View, sys: &System<S>, tint: [f64; 4]) {
    let [r, g, b, a] = tint;
    for body in &sys.bodies {
        let center = view.to_screen(body.displacement.x().to_f64(), body.displacement.y().to_f64());
        let radius = view.scale(body.radius.to_f64());
        canvas.draw_disk(center, &[r, g, b], ColorDomain::Unit, a, radius, None);
    }
}

/// Composite `frames` snapshots from `states` onto `canvas`
///
/// Pulls exactly `frames` items; frames whose tint is fully transparent are
/// still pulled (the simulation has to advance) but not drawn. Returns the
/// number of frames actually consumed, which is less than `frames` only if
/// `states` runs dry.
pub fn composite<S, I>(
    canvas: &mut Canvas,
    view: &View,
    gradient: &Gradient,
    frames: usize,
    states: I,
    background: Option<&mut dyn BackgroundFill>,
) -> usize
where
    S: Real,
    I: IntoIterator<Item = System<S>>,
{
    if let Some(fill) = background {
        info!("rendering background");
        fill.fill(canvas);
    }

    let mut consumed = 0;
    for (f, sys) in states.into_iter().take(frames).enumerate() {
        consumed += 1;
        let tint = gradient.lookup(frame_position(f, frames));
        if tint[3] == 0.0 {
            debug!("frame {f}: transparent, skipped");
            continue;
        }
        debug!("frame {f}: {} bodies, t = {:?}", sys.bodies.len(), sys.t);
        draw_frame(canvas, view, &sys, tint);
    }
    consumed
}
