//! # Protein origami
//!
//! Draws HP-model chains on a 2D lattice. The drawn path is fixed at seven
//! points; residues only decide bead colors and the contact energy.
pub mod consts;
pub mod lattice;
pub mod origami;

// re-exports
pub use lattice::*;
pub use origami::*;
