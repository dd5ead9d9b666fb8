//! # Coherent Noise
//!
//! Seeded 2D Perlin and Simplex noise for cave initialisation.
//!
//! ## Determinism Guarantee
//!
//! Given the same [`CaveSeed`], both generators produce **exactly** the same
//! values on any platform, any time. The permutation table is shuffled with a
//! plain xorshift, never with a platform RNG.

use serde::{Deserialize, Serialize};

/// Seed for deterministic cave generation.
///
/// All procedural randomness for one cave derives from this seed. Any 64-bit
/// integer is a valid seed: a negative value keeps its two's-complement bits,
/// so `-1` and `u64::MAX` name the same cave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SeedRepr", into = "u64")]
pub struct CaveSeed(u64);

/// Either signedness of seed accepted when deserializing.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeedRepr {
    Unsigned(u64),
    Signed(i64),
}

impl From<SeedRepr> for CaveSeed {
    fn from(repr: SeedRepr) -> Self {
        match repr {
            SeedRepr::Unsigned(value) => Self(value),
            SeedRepr::Signed(value) => Self::from(value),
        }
    }
}

impl From<u64> for CaveSeed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<i64> for CaveSeed {
    fn from(value: i64) -> Self {
        Self(u64::from_ne_bytes(value.to_ne_bytes()))
    }
}

impl From<CaveSeed> for u64 {
    fn from(seed: CaveSeed) -> Self {
        seed.0
    }
}

impl std::str::FromStr for CaveSeed {
    type Err = std::num::ParseIntError;

    /// Parses a decimal seed, signed or unsigned.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(value) => Ok(Self(value)),
            Err(_) => s.parse::<i64>().map(Self::from),
        }
    }
}

impl CaveSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose (e.g., noise vs. raw draws).
    ///
    /// Uses a hash function to create independent streams from one seed.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }
}

/// A continuous 2D scalar field.
pub trait NoiseField {
    /// Samples the field at `(x, y)`. Values lie roughly in `[-1, 1]`.
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Fractal sum of `octaves` layers, each at double frequency and half
    /// amplitude of the previous, normalised back into `[-1, 1]`.
    ///
    /// Zero octaves yields `0.0`.
    fn octaved(&self, x: f64, y: f64, octaves: u32) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves {
            total += self.sample(x * frequency, y * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        if max_amplitude > 0.0 {
            total / max_amplitude
        } else {
            0.0
        }
    }
}

/// Pre-computed permutation table shared by both noise kinds.
struct PermutationTable {
    /// 512-entry permutation table (256 entries, doubled for overflow handling).
    perm: [u8; 512],
}

impl PermutationTable {
    /// Creates a new permutation table from a seed.
    fn new(seed: CaveSeed) -> Self {
        let mut perm = [0u8; 512];
        for (i, p) in perm.iter_mut().take(256).enumerate() {
            *p = i as u8;
        }

        // Fisher-Yates with xorshift64; a zero state would never move
        let mut rng_state = seed.value() | 1;
        for i in (1..256).rev() {
            rng_state ^= rng_state << 13;
            rng_state ^= rng_state >> 7;
            rng_state ^= rng_state << 17;

            let j = (rng_state % (i as u64 + 1)) as usize;
            perm.swap(i, j);
        }

        let (low, high) = perm.split_at_mut(256);
        high.copy_from_slice(low);

        Self { perm }
    }

    /// Gets a permutation value (with automatic wrapping).
    #[inline]
    fn get(&self, index: usize) -> u8 {
        self.perm[index & 511]
    }

    /// Hash of an integer lattice point.
    #[inline]
    fn hash(&self, i: i32, j: i32) -> u8 {
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        self.get(ii + self.get(jj) as usize)
    }
}

/// 12 gradient vectors for 2D simplex.
#[rustfmt::skip]
const SIMPLEX_GRADIENTS: [[i8; 2]; 12] = [
    [1, 0], [1, 1], [0, 1], [-1, 1],
    [-1, 0], [-1, -1], [0, -1], [1, -1],
    [1, 0], [0, 1], [-1, 0], [0, -1],
];

/// 2D Simplex noise generator.
///
/// Produces smooth, continuous noise values in the range [-1, 1].
///
/// # Example
///
/// ```
/// use hollow_procedural::noise::{CaveSeed, NoiseField, SimplexNoise};
///
/// let noise = SimplexNoise::new(CaveSeed::new(42));
/// let value = noise.sample(10.5, 20.3);
/// assert!((-1.0..=1.0).contains(&value));
/// ```
pub struct SimplexNoise {
    /// The permutation table.
    perm_table: PermutationTable,
}

impl SimplexNoise {
    /// Skewing factor for 2D simplex grid.
    const F2: f64 = 0.366_025_403_784_439; // (sqrt(3) - 1) / 2
    /// Unskewing factor for 2D simplex grid.
    const G2: f64 = 0.211_324_865_405_187; // (3 - sqrt(3)) / 6

    /// Creates a new simplex noise generator from a seed.
    #[must_use]
    pub fn new(seed: CaveSeed) -> Self {
        Self {
            perm_table: PermutationTable::new(seed),
        }
    }

    /// Calculates the contribution from one corner of the simplex.
    #[inline]
    fn contribution(x: f64, y: f64, hash: u8) -> f64 {
        let t = 0.5 - x * x - y * y;
        if t < 0.0 {
            0.0
        } else {
            let grad = SIMPLEX_GRADIENTS[(hash % 12) as usize];
            let t2 = t * t;
            t2 * t2 * (x * f64::from(grad[0]) + y * f64::from(grad[1]))
        }
    }
}

impl NoiseField for SimplexNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        if !(x.is_finite() && y.is_finite()) {
            return 0.0;
        }

        // Skew input coordinates to simplex grid
        let skew = (x + y) * Self::F2;
        let (fi, i) = lattice(x + skew);
        let (fj, j) = lattice(y + skew);

        // Unskew to get first corner in simplex
        let unskew = (fi + fj) * Self::G2;
        let x0 = x - (fi - unskew);
        let y0 = y - (fj - unskew);

        // Upper or lower triangle
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + Self::G2;
        let y1 = y0 - f64::from(j1) + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        let n0 = Self::contribution(x0, y0, self.perm_table.hash(i, j));
        let n1 = Self::contribution(x1, y1, self.perm_table.hash(i + i1, j + j1));
        let n2 = Self::contribution(x2, y2, self.perm_table.hash(i + 1, j + 1));

        // 70.0 normalizes the output to [-1, 1]
        (70.0 * (n0 + n1 + n2)).clamp(-1.0, 1.0)
    }
}

/// 2D Perlin (gradient) noise generator.
///
/// Classic lattice noise with quintic fade; zero at every integer lattice
/// point, values in [-1, 1].
pub struct PerlinNoise {
    /// The permutation table.
    perm_table: PermutationTable,
}

impl PerlinNoise {
    /// Creates a new Perlin noise generator from a seed.
    #[must_use]
    pub fn new(seed: CaveSeed) -> Self {
        Self {
            perm_table: PermutationTable::new(seed),
        }
    }

    /// Dot product with one of 8 lattice gradients.
    #[inline]
    fn gradient(hash: u8, x: f64, y: f64) -> f64 {
        let h = hash & 7;
        let (u, v) = if h < 4 { (x, y) } else { (y, x) };
        (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
    }
}

impl NoiseField for PerlinNoise {
    fn sample(&self, x: f64, y: f64) -> f64 {
        if !(x.is_finite() && y.is_finite()) {
            return 0.0;
        }

        let (fx, xi) = lattice(x);
        let (fy, yi) = lattice(y);
        let xf = x - fx;
        let yf = y - fy;

        let u = fade(xf);
        let v = fade(yf);

        let aa = self.perm_table.hash(xi, yi);
        let ab = self.perm_table.hash(xi, yi + 1);
        let ba = self.perm_table.hash(xi + 1, yi);
        let bb = self.perm_table.hash(xi + 1, yi + 1);

        let bottom = lerp(
            Self::gradient(aa, xf, yf),
            Self::gradient(ba, xf - 1.0, yf),
            u,
        );
        let top = lerp(
            Self::gradient(ab, xf, yf - 1.0),
            Self::gradient(bb, xf - 1.0, yf - 1.0),
            u,
        );

        // Gradients reach sqrt(2) at most; scale back to unit range
        (lerp(bottom, top, v) * std::f64::consts::FRAC_1_SQRT_2).clamp(-1.0, 1.0)
    }
}

/// Quintic smoothstep.
#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Floor of `v` and that lattice index wrapped into `0..256`.
///
/// The table repeats every 256 cells, so wrapping keeps every hash identical
/// while the index arithmetic stays in range for any finite coordinate.
#[inline]
fn lattice(v: f64) -> (f64, i32) {
    let floor = v.floor();
    (floor, floor.rem_euclid(256.0) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let seed = CaveSeed::new(12345);
        let simplex1 = SimplexNoise::new(seed);
        let simplex2 = SimplexNoise::new(seed);
        let perlin1 = PerlinNoise::new(seed);
        let perlin2 = PerlinNoise::new(seed);

        for i in 0..100 {
            let x = f64::from(i) * 0.1;
            let y = f64::from(i) * 0.17;
            assert_eq!(simplex1.sample(x, y), simplex2.sample(x, y));
            assert_eq!(perlin1.sample(x, y), perlin2.sample(x, y));
        }
    }

    #[test]
    fn test_different_seeds_different_results() {
        let a = SimplexNoise::new(CaveSeed::new(1));
        let b = SimplexNoise::new(CaveSeed::new(2));

        let differs = (0..50).any(|i| {
            let x = f64::from(i) * 0.37 + 0.11;
            a.sample(x, x * 0.5) != b.sample(x, x * 0.5)
        });
        assert!(differs, "Different seeds should produce different results");
    }

    #[test]
    fn test_range() {
        let simplex = SimplexNoise::new(CaveSeed::new(42));
        let perlin = PerlinNoise::new(CaveSeed::new(42));

        for i in 0..10_000 {
            let x = f64::from(i) * 0.1 - 500.0;
            let y = f64::from(i) * 0.13 - 650.0;
            for value in [simplex.sample(x, y), perlin.sample(x, y)] {
                assert!(
                    (-1.0..=1.0).contains(&value),
                    "Value {value} out of range at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_far_coordinates_stay_in_range() {
        let simplex = SimplexNoise::new(CaveSeed::new(3));
        let perlin = PerlinNoise::new(CaveSeed::new(3));
        let far = [
            1.0e12,
            -3.0e15,
            f64::from(i32::MAX) * 4.0,
            f64::from(i32::MIN) - 0.5,
            1.0e300,
        ];

        for &x in &far {
            for &y in &[0.25, -x, x * 0.5] {
                for value in [simplex.sample(x, y), perlin.sample(x, y)] {
                    assert!((-1.0..=1.0).contains(&value), "{value} at ({x}, {y})");
                }
            }
        }
        for value in [
            simplex.sample(f64::INFINITY, 1.0),
            perlin.sample(1.0, f64::NAN),
        ] {
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_lattice_wraps_with_period_256() {
        let perlin = PerlinNoise::new(CaveSeed::new(11));
        let simplex = SimplexNoise::new(CaveSeed::new(11));
        assert_eq!(perlin.sample(3.25, 7.5), perlin.sample(3.25 + 256.0, 7.5 - 512.0));
        assert_eq!(lattice(-0.5), (-1.0, 255));
        assert_eq!(lattice(2.0e10).1, (2.0e10_f64 % 256.0) as i32);
        assert!(simplex.sample(-2.0e9, 2.0e9).is_finite());
    }

    #[test]
    fn test_many_octaves_do_not_overflow() {
        let simplex = SimplexNoise::new(CaveSeed::new(42));
        let perlin = PerlinNoise::new(CaveSeed::new(42));
        for octaves in [31, 40, 64, 200] {
            for value in [
                simplex.octaved(0.7, 0.3, octaves),
                perlin.octaved(0.7, 0.3, octaves),
            ] {
                assert!((-1.0..=1.0).contains(&value), "{octaves} octaves gave {value}");
            }
        }
    }

    #[test]
    fn test_perlin_zero_on_lattice() {
        let perlin = PerlinNoise::new(CaveSeed::new(7));
        for i in -5..5 {
            assert_eq!(perlin.sample(f64::from(i), f64::from(i * 3)), 0.0);
        }
    }

    #[test]
    fn test_continuity() {
        let noise = PerlinNoise::new(CaveSeed::new(42));
        let v1 = noise.sample(100.3, 100.7);
        let v2 = noise.sample(100.301, 100.7);
        assert!((v1 - v2).abs() < 0.01, "Noise should be continuous");
    }

    #[test]
    fn test_octaved_noise() {
        let noise = SimplexNoise::new(CaveSeed::new(42));

        let value = noise.octaved(10.0, 10.0, 6);
        assert!((-1.0..=1.0).contains(&value));
        assert_eq!(noise.octaved(10.0, 10.0, 0), 0.0);
        assert_eq!(noise.octaved(3.3, 4.4, 1), noise.sample(3.3, 4.4));
    }

    #[test]
    fn test_signed_seeds_reinterpret_bits() {
        assert_eq!(CaveSeed::from(-1i64), CaveSeed::new(u64::MAX));
        assert_eq!(CaveSeed::from(-5i64).value(), u64::MAX - 4);
        assert_eq!(CaveSeed::from(42i64), CaveSeed::new(42));

        assert_eq!("-5".parse::<CaveSeed>(), Ok(CaveSeed::from(-5i64)));
        assert_eq!("18446744073709551615".parse::<CaveSeed>(), Ok(CaveSeed::new(u64::MAX)));
        assert_eq!(
            format!("{}", i64::MIN).parse::<CaveSeed>(),
            Ok(CaveSeed::new(1 << 63))
        );
        assert!("seven".parse::<CaveSeed>().is_err());
        assert!("-18446744073709551616".parse::<CaveSeed>().is_err());
    }

    #[test]
    fn test_seed_derivation() {
        let base = CaveSeed::new(42);
        let derived1 = base.derive(1);
        let derived2 = base.derive(2);

        assert_ne!(derived1, derived2, "Different purposes should give different seeds");
        assert_eq!(derived1, base.derive(1), "Same purpose should give same seed");
        assert_ne!(derived1, base, "Derived seed should differ from base");
    }
}
