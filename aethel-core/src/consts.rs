/// Nucleotide symbols, in canonical enumeration order.
pub const DNA_SYMBOLS: [char; 4] = ['A', 'C', 'G', 'T'];

/// Hydrophobic and polar residue symbols.
pub const HP_SYMBOLS: [char; 2] = ['H', 'P'];

pub const HYDROPHOBIC: char = 'H';
