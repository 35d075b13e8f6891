//! Decorative star field, the stock [`BackgroundFill`]

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::canvas::{Canvas, ColorDomain};
use super::render::BackgroundFill;

pub struct StarField {
    pub count: usize,
    rng: StdRng,
}

impl StarField {
    /// Reproducible field for a given seed
    pub fn seeded(count: usize, seed: u64) -> Self {
        Self {
            count,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy(count: usize) -> Self {
        Self {
            count,
            rng: StdRng::from_entropy(),
        }
    }
}

impl BackgroundFill for StarField {
    fn fill(&mut self, canvas: &mut Canvas) {
        let w = canvas.width() as f64;
        let h = canvas.height() as f64;

        for _ in 0..self.count {
            // a little past the edges so border stars get clipped naturally
            let x = self.rng.gen::<f64>() * (w + 4.0) - 2.0;
            let y = self.rng.gen::<f64>() * (h + 4.0) - 2.0;

            let mut rgb = [0.0; 3];
            for c in rgb.iter_mut() {
                *c = 0.5 + 0.25 * self.rng.gen::<f64>() + 0.25 * self.rng.gen::<f64>();
            }
            // green never dominates
            rgb[1] = rgb[0].min(rgb[1]).min(rgb[2]);

            let radius = self.rng.gen::<f64>() * 1.2;
            canvas.draw_disk((x, y), &rgb, ColorDomain::Unit, 1.0, radius, None);
        }
        debug!("drew {} background stars", self.count);
    }
}
