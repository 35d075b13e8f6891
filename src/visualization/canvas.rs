//! Mutable pixel buffer with per-channel blending
//!
//! Pixels are addressed with signed coordinates; anything outside
//! `[0, width) x [0, height)` is silently ignored on both read and write, so
//! off-screen bodies can be drawn without any clipping logic at the call site.

use serde::Deserialize;

use super::bitmap;
use crate::error::{Error, Result};

/// Per-channel blend strategy applied when a color is written
/// `pen: "replace" | "add" | "min" | "max" | "diff" | "xor"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Pen {
    Replace,
    Add, // saturates at 255
    Min,
    Max,
    Diff,
    Xor,
}

impl Pen {
    pub fn blend(self, old: u8, new: u8) -> u8 {
        match self {
            Pen::Replace => new,
            Pen::Add => old.saturating_add(new),
            Pen::Min => old.min(new),
            Pen::Max => old.max(new),
            Pen::Diff => old.abs_diff(new),
            Pen::Xor => old ^ new,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// How the components of a color argument are to be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDomain {
    /// components in `[0, 1]`
    Unit,
    /// components in `[0, 255]`
    Byte,
}

impl ColorDomain {
    fn max(self) -> f64 {
        match self {
            ColorDomain::Unit => 1.0,
            ColorDomain::Byte => 255.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    format: PixelFormat,
    data: Vec<u8>, // row-major, `format.channels()` bytes per pixel
    pub pen: Pen,
}

impl Canvas {
    /// Canvas filled with `fill` (missing channels are zero)
    pub fn new(width: usize, height: usize, format: PixelFormat, fill: &[u8], pen: Pen) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::config(format!("canvas must not be empty, got {width}x{height}")));
        }
        let channels = format.channels();
        if width > i32::MAX as usize
            || height > i32::MAX as usize
            || bitmap::data_size(width, height, channels).is_none()
        {
            return Err(Error::config(format!("canvas {width}x{height} is too large for a bitmap")));
        }

        let mut pixel = vec![0u8; channels];
        for (dst, src) in pixel.iter_mut().zip(fill) {
            *dst = *src;
        }

        Ok(Self {
            width,
            height,
            format,
            data: pixel.repeat(width * height),
            pen,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.format.channels()
    }

    /// Row `y`, top to bottom
    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.width * self.channels();
        &self.data[y * stride..(y + 1) * stride]
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some((y as usize * self.width + x as usize) * self.channels())
    }

    /// Stored color, `None` outside the canvas
    pub fn get(&self, x: i64, y: i64) -> Option<&[u8]> {
        self.index(x, y)
            .map(|i| &self.data[i..i + self.channels()])
    }

    /// Overwrite a pixel; no-op outside the canvas
    pub fn set(&mut self, x: i64, y: i64, color: &[u8]) {
        if let Some(i) = self.index(x, y) {
            let channels = self.channels();
            for (dst, src) in self.data[i..i + channels].iter_mut().zip(color) {
                *dst = *src;
            }
        }
    }

    /// Bytes for `color`, scaled by `opacity`
    ///
    /// Missing trailing components are taken as the domain maximum, so an RGB
    /// color on an RGBA canvas is fully opaque before the opacity is applied.
    pub fn normalize(&self, color: &[f64], domain: ColorDomain, opacity: f64) -> Vec<u8> {
        let max = domain.max();
        (0..self.channels())
            .map(|c| {
                let value = color.get(c).copied().unwrap_or(max).clamp(0.0, max);
                let scaled = value * (255.0 / max) * opacity;
                scaled.clamp(0.0, 255.0) as u8
            })
            .collect()
    }

    /// Blend one pixel with `pen` (the canvas pen when `None`)
    pub fn point(&mut self, x: i64, y: i64, color: &[f64], domain: ColorDomain, opacity: f64, pen: Option<Pen>) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let pen = pen.unwrap_or(self.pen);
        let incoming = self.normalize(color, domain, opacity);
        for (old, new) in self.data[i..i + incoming.len()].iter_mut().zip(incoming) {
            *old = pen.blend(*old, new);
        }
    }

    /// Antialiased filled circle
    ///
    /// Pixels within `radius - 0.5` of `center` get the full `opacity`, pixels
    /// in the one-pixel band out to `radius + 0.5` fade linearly. A radius of
    /// 0.5 on an integer center covers exactly one pixel.
    pub fn draw_disk(
        &mut self,
        center: (f64, f64),
        color: &[f64],
        domain: ColorDomain,
        opacity: f64,
        radius: f64,
        pen: Option<Pen>,
    ) {
        let (cx, cy) = center;

        // clip the bounding box to the canvas before walking it
        let x0 = (cx - radius - 1.0).floor().max(0.0);
        let y0 = (cy - radius - 1.0).floor().max(0.0);
        let x1 = (cx + radius + 1.0).ceil().min(self.width as f64 - 1.0);
        let y1 = (cy + radius + 1.0).ceil().min(self.height as f64 - 1.0);
        if !(x0 <= x1 && y0 <= y1) {
            return;
        }

        for py in y0 as i64..=y1 as i64 {
            for px in x0 as i64..=x1 as i64 {
                let dx = px as f64 - cx;
                let dy = py as f64 - cy;
                let dist = (dx * dx + dy * dy).sqrt();

                if dist <= radius - 0.5 {
                    self.point(px, py, color, domain, opacity, pen);
                } else if dist < radius + 0.5 {
                    let coverage = radius - dist + 0.5;
                    self.point(px, py, color, domain, opacity * coverage, pen);
                }
            }
        }
    }

    /// Number of pixels differing from `background` (test and log helper)
    pub fn count_not(&self, background: &[u8]) -> usize {
        self.data
            .chunks(self.channels())
            .filter(|px| *px != background)
            .count()
    }
}
