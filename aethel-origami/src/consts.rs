/// Number of beads drawn by every sketch.
pub const LATTICE_BEADS: usize = 7;

/// The drawn fold. It does not depend on the sequence or its length.
pub const LATTICE_PATH: [(i32, i32); LATTICE_BEADS] =
    [(0, 0), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (0, -1)];

/// Energy contributed by each non-bonded H-H lattice contact.
pub const HH_CONTACT_ENERGY: i32 = -1;
