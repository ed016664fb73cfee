//! Constants
//!
//! Fixed numeric tables and the slider bounds used by the teaching demos.

/// Lanczos `g` parameter.
pub const LANCZOS_G: f64 = 7.0;
/// Lanczos coefficients for `g = 7`, nine terms.
pub const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Number of Simpson subintervals used by the chi-square CDF.
pub const SIMPSON_INTERVALS: usize = 1000;

/// Chi-square critical value for one degree of freedom at alpha = 0.05.
pub const CRITICAL_VALUE_DF1_ALPHA05: f64 = 3.841;
/// Degrees of freedom of any 2x2 contingency table.
pub const TABLE_2X2_DF: usize = 1;
pub const DEFAULT_SIGNIFICANCE_LEVEL: f64 = 0.05;

// Slider bounds
pub const MIN_DF: usize = 1;
pub const MAX_DF: usize = 20;
pub const MIN_SAMPLE_SIZE: usize = 10;
pub const MAX_SAMPLE_SIZE: usize = 1000;

/// Draws per run of the type I / type II error simulator.
pub const ERROR_SIM_DRAWS: usize = 100;
/// How many generated scores the significance game remembers.
pub const SCORE_HISTORY_LEN: usize = 5;

/// Chunk size for parallel sampling. Each chunk owns a seeded generator,
/// so output only depends on the seed and not on the thread count.
pub const SAMPLE_CHUNK_SIZE: usize = 1024;
