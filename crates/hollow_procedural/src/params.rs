//! # Generation Parameters
//!
//! Read-only input for one generation call: seed, initial noise shaping and
//! the ordered list of cellular automaton steps.

use serde::{Deserialize, Serialize};

use crate::error::{CaveError, CaveResult};
use crate::noise::CaveSeed;

/// How the initial wall/floor field is seeded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// One uniform draw per cell, thresholded by the wall chance.
    #[default]
    Random,
    /// Multi-octave Perlin noise.
    Perlin,
    /// Multi-octave Simplex noise.
    Simplex,
}

impl NoiseKind {
    /// True for the continuous noise kinds.
    #[inline]
    #[must_use]
    pub const fn is_coherent(self) -> bool {
        matches!(self, Self::Perlin | Self::Simplex)
    }
}

/// Inclusive neighbour-count range. `min > max` never matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountRange {
    /// Lowest matching count.
    pub min: i32,
    /// Highest matching count.
    pub max: i32,
}

impl CountRange {
    /// Creates a range.
    #[inline]
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// True if `count` falls in `[min, max]`.
    #[inline]
    #[must_use]
    pub const fn contains(self, count: i32) -> bool {
        self.min <= count && count <= self.max
    }
}

/// One cellular automaton rule applied `reps` times.
///
/// Counts are of wall cells: `*3` over the 8-cell ring at distance 1,
/// `*5` over the 16-cell ring at distance 2.
///
/// Deserializes from a table of named fields or from a flat 9-value array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StepRepr")]
pub struct GenerationStep {
    /// Birth, 3x3 ring, lower bound.
    pub b3_min: i32,
    /// Birth, 3x3 ring, upper bound.
    pub b3_max: i32,
    /// Birth, 5x5 ring, lower bound.
    pub b5_min: i32,
    /// Birth, 5x5 ring, upper bound.
    pub b5_max: i32,
    /// Survival, 3x3 ring, lower bound.
    pub s3_min: i32,
    /// Survival, 3x3 ring, upper bound.
    pub s3_max: i32,
    /// Survival, 5x5 ring, lower bound.
    pub s5_min: i32,
    /// Survival, 5x5 ring, upper bound.
    pub s5_max: i32,
    /// Number of generations to run with this rule.
    pub reps: i32,
}

impl GenerationStep {
    /// Birth range over the inner ring.
    #[inline]
    #[must_use]
    pub const fn birth3(&self) -> CountRange {
        CountRange::new(self.b3_min, self.b3_max)
    }

    /// Birth range over the outer ring.
    #[inline]
    #[must_use]
    pub const fn birth5(&self) -> CountRange {
        CountRange::new(self.b5_min, self.b5_max)
    }

    /// Survival range over the inner ring.
    #[inline]
    #[must_use]
    pub const fn survive3(&self) -> CountRange {
        CountRange::new(self.s3_min, self.s3_max)
    }

    /// Survival range over the outer ring.
    #[inline]
    #[must_use]
    pub const fn survive5(&self) -> CountRange {
        CountRange::new(self.s5_min, self.s5_max)
    }
}

impl TryFrom<&[i32]> for GenerationStep {
    type Error = CaveError;

    /// Parses `[b3_min, b3_max, b5_min, b5_max, s3_min, s3_max, s5_min, s5_max, reps]`.
    fn try_from(values: &[i32]) -> CaveResult<Self> {
        let [b3_min, b3_max, b5_min, b5_max, s3_min, s3_max, s5_min, s5_max, reps] =
            <[i32; 9]>::try_from(values).map_err(|_| CaveError::InvalidStep { len: values.len() })?;
        Ok(Self {
            b3_min,
            b3_max,
            b5_min,
            b5_max,
            s3_min,
            s3_max,
            s5_min,
            s5_max,
            reps,
        })
    }
}

/// Accepted on-disk shapes of a step.
#[derive(Deserialize)]
#[serde(untagged)]
enum StepRepr {
    Table {
        b3_min: i32,
        b3_max: i32,
        b5_min: i32,
        b5_max: i32,
        s3_min: i32,
        s3_max: i32,
        s5_min: i32,
        s5_max: i32,
        reps: i32,
    },
    Flat(Vec<i32>),
}

impl TryFrom<StepRepr> for GenerationStep {
    type Error = CaveError;

    fn try_from(repr: StepRepr) -> CaveResult<Self> {
        match repr {
            StepRepr::Table {
                b3_min,
                b3_max,
                b5_min,
                b5_max,
                s3_min,
                s3_max,
                s5_min,
                s5_max,
                reps,
            } => Ok(Self {
                b3_min,
                b3_max,
                b5_min,
                b5_max,
                s3_min,
                s3_max,
                s5_min,
                s5_max,
                reps,
            }),
            StepRepr::Flat(values) => Self::try_from(values.as_slice()),
        }
    }
}

/// Everything that shapes one cave besides its size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Seed for every random draw.
    pub seed: CaveSeed,
    /// Octave count for coherent noise.
    pub octaves: u32,
    /// Initial field kind.
    pub noise: NoiseKind,
    /// Threshold for the raw random path; ignored by coherent noise.
    pub wall_chance: f64,
    /// Scales the normalised sampling domain.
    pub frequency: f64,
    /// Added to the normalisation denominator, `(extent - 1 + amplitude)`.
    pub amplitude: f64,
    /// Automaton rules, applied in order.
    pub steps: Vec<GenerationStep>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            seed: CaveSeed::default(),
            octaves: 8,
            noise: NoiseKind::Random,
            wall_chance: 0.0,
            frequency: 1.0,
            amplitude: 1.0,
            steps: Vec::new(),
        }
    }
}

impl GenerationParams {
    /// Replaces the step list from flat 9-value arrays.
    ///
    /// Arrays of the wrong length are skipped with a warning. Returns the
    /// number of steps accepted.
    pub fn set_steps_from_arrays<A: AsRef<[i32]>>(&mut self, arrays: &[A]) -> usize {
        self.steps.clear();
        for (index, values) in arrays.iter().enumerate() {
            match GenerationStep::try_from(values.as_ref()) {
                Ok(step) => self.steps.push(step),
                Err(err) => tracing::warn!("skipping generation step {}: {}", index, err),
            }
        }
        self.steps.len()
    }

    /// Checks values that would otherwise poison the grid with NaNs.
    ///
    /// Steps with a negative repetition count are accepted and run zero times.
    ///
    /// # Errors
    ///
    /// Returns [`CaveError::InvalidParams`] describing the first bad field.
    pub fn validate(&self) -> CaveResult<()> {
        for (name, value) in [
            ("wall_chance", self.wall_chance),
            ("frequency", self.frequency),
            ("amplitude", self.amplitude),
        ] {
            if !value.is_finite() {
                return Err(CaveError::InvalidParams(format!("{name} must be finite, got {value}")));
            }
        }
        if self.noise.is_coherent() && self.octaves == 0 {
            return Err(CaveError::InvalidParams(
                "coherent noise needs at least one octave".to_string(),
            ));
        }
        Ok(())
    }
}
