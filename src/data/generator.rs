use std::path::Path;

use anyhow::{Context, Result};

use super::model::SampleTable;

// ---------------------------------------------------------------------------
// Generation parameters
// ---------------------------------------------------------------------------

/// Rows per generated table.
pub const SAMPLE_ROWS: usize = 12;
/// Spacing of the age axis, in months.
pub const AGE_STEP_MONTHS: f64 = 2.5;
/// Mass at age 0, in pounds.
pub const BASE_MASS_LB: f64 = 264.0;
/// Per-row mass increase before noise, in pounds.
pub const MASS_STEP_LB: f64 = 100.0;
/// Width of the uniform noise interval `[-NOISE_SPAN_LB/2, NOISE_SPAN_LB/2)`.
pub const NOISE_SPAN_LB: f64 = 100.0;

/// Header line written at the top of every sample table.
pub const TABLE_HEADER: &str = "# Age (months),Mass (lb)";

// ---------------------------------------------------------------------------
// SampleRng – explicit, locally-owned randomness
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG (xoshiro256**).
///
/// The generator owns its state and is seeded by the caller, so a fixed seed
/// reproduces the same table byte for byte without touching any process-wide
/// generator.
pub struct SampleRng {
    state: [u64; 4],
}

impl SampleRng {
    pub fn new(seed: u64) -> Self {
        // SplitMix-style expansion of the seed into the four state words.
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SampleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform draw from `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform measurement noise from `[-NOISE_SPAN_LB/2, NOISE_SPAN_LB/2)`.
    pub fn noise_lb(&mut self) -> f64 {
        (self.next_f64() - 0.5) * NOISE_SPAN_LB
    }
}

// ---------------------------------------------------------------------------
// Table generation
// ---------------------------------------------------------------------------

/// Build one noisy measurement series from the given random source.
///
/// Ages are `0, 2.5, …, 27.5`; the baseline mass starts at [`BASE_MASS_LB`]
/// and climbs by [`MASS_STEP_LB`] per row before noise. Masses are rounded
/// to 2 decimal places, matching what gets written to disk.
pub fn generate_table(rng: &mut SampleRng) -> SampleTable {
    let ages: Vec<f64> = (0..SAMPLE_ROWS)
        .map(|i| i as f64 * AGE_STEP_MONTHS)
        .collect();

    let masses: Vec<f64> = (0..SAMPLE_ROWS)
        .map(|i| {
            let baseline = BASE_MASS_LB + i as f64 * MASS_STEP_LB;
            let noisy = baseline + rng.noise_lb();
            (noisy * 100.0).round() / 100.0
        })
        .collect();

    SampleTable { ages, masses }
}

/// Generate a fresh sample table for `seed` and write it to `path`,
/// creating or overwriting the file. Same seed, same bytes.
pub fn write_sample_table(path: &Path, seed: u64) -> Result<()> {
    let mut rng = SampleRng::new(seed);
    let table = generate_table(&mut rng);

    let mut out = String::with_capacity(256);
    out.push_str(TABLE_HEADER);
    out.push('\n');
    for (age, mass) in table.points() {
        out.push_str(&format!("{age},{mass:.2}\n"));
    }

    std::fs::write(path, out)
        .with_context(|| format!("writing sample table {}", path.display()))
}
