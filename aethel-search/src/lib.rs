//! # Mock quantum DNA search
//!
//! Encodes 2-base DNA targets onto four qubits and produces the amplitude chart
//! a single Grover iteration would be expected to show. No circuit is simulated.
//!
//! ```
//! use aethel_search::{encode_pair, mock_amplitudes};
//!
//! assert_eq!(encode_pair("AT").unwrap(), "0011");
//! assert_eq!(mock_amplitudes("AT").get("AT"), Some(0.6));
//! ```
pub mod amplitude;
pub mod codec;
pub mod consts;
pub mod oracle;

// re-exports
pub use amplitude::*;
pub use codec::*;
pub use oracle::*;
