#[cfg(feature = "core")]
#[doc(inline)]
pub use aethel_core as core;

#[cfg(feature = "search")]
#[doc(inline)]
pub use aethel_search as search;

#[cfg(feature = "chrono")]
#[doc(inline)]
pub use aethel_chrono as chrono;

#[cfg(feature = "origami")]
#[doc(inline)]
pub use aethel_origami as origami;
