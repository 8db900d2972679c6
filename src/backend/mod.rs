//! Implementation strategies.
//!
//! The algorithms in [`iterables`](crate::iterables) and
//! [`sequences`](crate::sequences) are written once. The parts whose speed
//! depends on the implementation are factored into the [`Kernels`] trait:
//!
//! - hashing of keys for de-duplication ([`Kernels::key_state`])
//! - scanning byte sequences ([`Kernels::find_byte`], [`Kernels::find_bytes`])
//!
//! [`PortableKernels`] is always present. [`AcceleratedKernels`] is compiled
//! in with the `accelerated` feature.

#[cfg(feature = "accelerated")]
mod accelerated;
mod hashing;
mod portable;

use std::fmt;

#[cfg(feature = "accelerated")]
pub use accelerated::AcceleratedKernels;
pub use hashing::{KeyHasher, KeyState};
pub use portable::PortableKernels;

use crate::resolver::Resolution;

/// The operations that differ between implementations.
///
/// Implementations must agree exactly on results; only speed may differ.
pub trait Kernels: Send + Sync + fmt::Debug {
    /// The resolution this implementation serves.
    fn resolution(&self) -> Resolution;

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// A fresh hasher state for a set of observed keys.
    ///
    /// Every call may return a differently seeded state; a set must keep the
    /// state it was created with.
    fn key_state(&self) -> KeyState;

    /// Position of the first `needle` byte in `haystack`.
    fn find_byte(&self, haystack: &[u8], needle: u8) -> Option<usize>;

    /// Position of the first occurrence of `needle` in `haystack`.
    ///
    /// An empty needle matches at position 0.
    fn find_bytes(&self, haystack: &[u8], needle: &[u8]) -> Option<usize>;
}

static PORTABLE: PortableKernels = PortableKernels;

#[cfg(feature = "accelerated")]
static ACCELERATED: AcceleratedKernels = AcceleratedKernels;

/// Capability probe for the accelerated implementation.
pub(crate) const fn probe_accelerated() -> bool {
    cfg!(feature = "accelerated")
}

/// The kernels serving `resolution`, if this build has them.
pub(crate) fn kernels_for(resolution: Resolution) -> Option<&'static dyn Kernels> {
    match resolution {
        Resolution::Portable => Some(&PORTABLE),
        #[cfg(feature = "accelerated")]
        Resolution::Native => Some(&ACCELERATED),
        #[cfg(not(feature = "accelerated"))]
        Resolution::Native => None,
    }
}
