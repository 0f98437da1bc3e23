//! Lane colours: evenly spaced hues handed out round-robin.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SATURATION: f64 = 0.65;
const VALUE: f64 = 0.85;

/// Index into a [`Palette`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorIndex(pub usize);

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fixed set of colours plus the round-robin cursor used at lane creation
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
    start_hue: f64,
    cursor: usize,
}

impl Palette {
    /// Build `size` colours starting from a hue drawn from `seed`
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. `LayoutOptions::validate` rejects that before
    /// the layout builds a palette.
    pub fn new(size: usize, seed: u64) -> Self {
        let start_hue = StdRng::seed_from_u64(seed).gen_range(0.0..360.0);
        Self::with_start_hue(size, start_hue)
    }

    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn with_start_hue(size: usize, start_hue: f64) -> Self {
        assert!(size > 0, "palette needs at least one colour");
        let step = 360.0 / size as f64;
        let colors = (0..size)
            .map(|i| hsv_to_rgb(start_hue + i as f64 * step, SATURATION, VALUE))
            .collect();
        Self {
            colors,
            start_hue,
            cursor: 0,
        }
    }

    /// Next colour in round-robin order
    pub fn allocate(&mut self) -> ColorIndex {
        let index = ColorIndex(self.cursor);
        self.cursor = (self.cursor + 1) % self.colors.len();
        index
    }

    /// Resolve an index handed out by [`Palette::allocate`]
    pub fn color(&self, index: ColorIndex) -> Rgb {
        self.colors[index.0 % self.colors.len()]
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn start_hue(&self) -> f64 {
        self.start_hue
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb {
        r: ((r + m) * 255.0).round() as u8,
        g: ((g + m) * 255.0).round() as u8,
        b: ((b + m) * 255.0).round() as u8,
    }
}
