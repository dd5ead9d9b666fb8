//! # Initial Field
//!
//! Fills a fresh grid with wall and floor from one scalar per cell.
//! Negative samples become wall, everything else floor.
//!
//! The sampling strategy is picked once from [`NoiseKind`] and then used
//! for every cell, so the per-cell loop never branches on parameters.

use hollow_core::{Grid, TileState};

use crate::noise::{NoiseField, PerlinNoise, SimplexNoise};
use crate::params::{GenerationParams, NoiseKind};
use crate::random::RandomSource;

/// Sub-seed purpose for coherent noise permutation tables.
const NOISE_STREAM: u64 = 0x6e6f_6973_65;

/// Per-generation cell sampler.
pub enum FieldSampler {
    /// `|draw| - wall_chance` per cell, drawn in row-major order.
    Random {
        /// Uniform draws.
        source: RandomSource,
        /// Threshold subtracted from every draw.
        wall_chance: f64,
    },
    /// Fractal Perlin noise over the normalised domain.
    Perlin(CoherentSampler<PerlinNoise>),
    /// Fractal Simplex noise over the normalised domain.
    Simplex(CoherentSampler<SimplexNoise>),
}

/// Shapes the sampling domain for coherent noise.
pub struct CoherentSampler<N> {
    /// Noise generator.
    noise: N,
    /// Octave count.
    octaves: u32,
    /// Domain scale.
    frequency: f64,
    /// Extra span added to the normalisation denominator.
    amplitude: f64,
}

impl<N: NoiseField> CoherentSampler<N> {
    /// Creates a sampler around `noise`.
    #[must_use]
    pub const fn new(noise: N, octaves: u32, frequency: f64, amplitude: f64) -> Self {
        Self {
            noise,
            octaves,
            frequency,
            amplitude,
        }
    }

    /// Maps a cell index onto the noise domain: `c / (extent - 1 + amplitude) * frequency`.
    ///
    /// A zero denominator (single-cell extent with no amplitude) pins the
    /// coordinate to the origin.
    fn domain(&self, c: usize, extent: usize) -> f64 {
        let span = (extent - 1) as f64 + self.amplitude;
        if span == 0.0 {
            0.0
        } else {
            c as f64 / span * self.frequency
        }
    }

    /// Samples the field for cell `(cx, cy)` of a `width x height` cave.
    #[must_use]
    pub fn sample(&self, cx: usize, cy: usize, width: usize, height: usize) -> f64 {
        let x = self.domain(cx, width);
        let y = self.domain(cy, height);
        self.noise.octaved(x, y, self.octaves)
    }
}

impl FieldSampler {
    /// Picks the sampler for `params`.
    #[must_use]
    pub fn from_params(params: &GenerationParams) -> Self {
        let seed = params.seed;
        let noise_seed = seed.derive(NOISE_STREAM);
        match params.noise {
            NoiseKind::Random => Self::Random {
                source: RandomSource::new(seed),
                wall_chance: params.wall_chance,
            },
            NoiseKind::Perlin => Self::Perlin(CoherentSampler::new(
                PerlinNoise::new(noise_seed),
                params.octaves,
                params.frequency,
                params.amplitude,
            )),
            NoiseKind::Simplex => Self::Simplex(CoherentSampler::new(
                SimplexNoise::new(noise_seed),
                params.octaves,
                params.frequency,
                params.amplitude,
            )),
        }
    }

    /// Next cell value. Must be called in row-major order.
    pub fn sample(&mut self, cx: usize, cy: usize, width: usize, height: usize) -> f64 {
        match self {
            Self::Random {
                source,
                wall_chance,
            } => source.next_float().abs() - *wall_chance,
            Self::Perlin(sampler) => sampler.sample(cx, cy, width, height),
            Self::Simplex(sampler) => sampler.sample(cx, cy, width, height),
        }
    }

    /// Overwrites every interior cell of `grid`.
    pub fn fill(&mut self, grid: &mut Grid) {
        let (width, height) = (grid.width(), grid.height());
        for cy in 0..height {
            for cx in 0..width {
                let state = if self.sample(cx, cy, width, height) < 0.0 {
                    TileState::Wall
                } else {
                    TileState::Floor
                };
                grid.set(cx as i32, cy as i32, state);
            }
        }
    }
}
