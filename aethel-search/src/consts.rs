/// Qubits needed to hold a 2-base target (2 bits per base).
pub const PAIR_QUBITS: usize = 4;

/// Length of a search target, in bases.
pub const PAIR_LENGTH: usize = 2;

/// Display value for every non-target state.
pub const BASELINE_PROBABILITY: f64 = 0.03;

/// Display value for the amplified target state.
pub const AMPLIFIED_PROBABILITY: f64 = 0.6;

/// Every 2-base sequence over A, C, G, T. The first base cycles slower.
pub const CANONICAL_PAIRS: [&str; 16] = [
    "AA", "AC", "AG", "AT", "CA", "CC", "CG", "CT", "GA", "GC", "GG", "GT", "TA", "TC", "TG", "TT",
];
