//! Key hashing shared by both implementations.
//!
//! [`KeyState`] is a single [`BuildHasher`] type whose algorithm is picked
//! at runtime, so sets of observed keys have the same type whichever
//! implementation created them.

use std::collections::hash_map::{DefaultHasher, RandomState};
use std::fmt;
use std::hash::{BuildHasher, Hasher};

#[cfg(feature = "accelerated")]
use rustc_hash::{FxBuildHasher, FxHasher};

#[derive(Clone)]
enum StateInner {
    Sip(RandomState),
    #[cfg(feature = "accelerated")]
    Fx(FxBuildHasher),
}

/// Hasher state for sets of observed keys.
#[derive(Clone)]
pub struct KeyState(StateInner);

impl KeyState {
    /// Name of the hash algorithm.
    #[must_use]
    pub fn algorithm(&self) -> &'static str {
        match self.0 {
            StateInner::Sip(_) => "siphash",
            #[cfg(feature = "accelerated")]
            StateInner::Fx(_) => "fxhash",
        }
    }

    /// Randomly seeded SipHash, as used by `std::collections::HashSet`.
    #[must_use]
    pub fn sip() -> Self {
        Self(StateInner::Sip(RandomState::new()))
    }

    /// `FxHash`, the multiply-rotate hash from `rustc-hash`.
    #[cfg(feature = "accelerated")]
    #[must_use]
    pub const fn fx() -> Self {
        Self(StateInner::Fx(FxBuildHasher))
    }
}

impl fmt::Debug for KeyState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("KeyState")
            .field(&self.algorithm())
            .finish()
    }
}

impl BuildHasher for KeyState {
    type Hasher = KeyHasher;

    fn build_hasher(&self) -> KeyHasher {
        match &self.0 {
            StateInner::Sip(state) => KeyHasher(HasherInner::Sip(state.build_hasher())),
            #[cfg(feature = "accelerated")]
            StateInner::Fx(state) => KeyHasher(HasherInner::Fx(state.build_hasher())),
        }
    }
}

#[derive(Clone)]
enum HasherInner {
    Sip(DefaultHasher),
    #[cfg(feature = "accelerated")]
    Fx(FxHasher),
}

/// Hasher produced by [`KeyState`].
#[derive(Clone)]
pub struct KeyHasher(HasherInner);

impl fmt::Debug for KeyHasher {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let algorithm = match self.0 {
            HasherInner::Sip(_) => "siphash",
            #[cfg(feature = "accelerated")]
            HasherInner::Fx(_) => "fxhash",
        };
        formatter.debug_tuple("KeyHasher").field(&algorithm).finish()
    }
}

macro_rules! forward_write {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            #[inline]
            fn $method(&mut self, value: $ty) {
                match &mut self.0 {
                    HasherInner::Sip(hasher) => hasher.$method(value),
                    #[cfg(feature = "accelerated")]
                    HasherInner::Fx(hasher) => hasher.$method(value),
                }
            }
        )*
    };
}

impl Hasher for KeyHasher {
    #[inline]
    fn finish(&self) -> u64 {
        match &self.0 {
            HasherInner::Sip(hasher) => hasher.finish(),
            #[cfg(feature = "accelerated")]
            HasherInner::Fx(hasher) => hasher.finish(),
        }
    }

    forward_write! {
        write: &[u8],
        write_u8: u8,
        write_u16: u16,
        write_u32: u32,
        write_u64: u64,
        write_u128: u128,
        write_usize: usize,
        write_i8: i8,
        write_i16: i16,
        write_i32: i32,
        write_i64: i64,
        write_i128: i128,
        write_isize: isize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hash_with(state: &KeyState, value: &str) -> u64 {
        state.hash_one(value)
    }

    #[rstest]
    fn test_same_state_hashes_consistently() {
        let state = KeyState::sip();
        assert_eq!(hash_with(&state, "key"), hash_with(&state, "key"));
    }

    #[rstest]
    fn test_sip_state_reports_algorithm() {
        assert_eq!(KeyState::sip().algorithm(), "siphash");
        assert_eq!(format!("{:?}", KeyState::sip()), "KeyState(\"siphash\")");
    }

    #[rstest]
    fn test_cloned_state_hashes_like_original() {
        let state = KeyState::sip();
        let cloned = state.clone();
        assert_eq!(hash_with(&state, "key"), hash_with(&cloned, "key"));
    }

    #[cfg(feature = "accelerated")]
    #[rstest]
    fn test_fx_state_is_deterministic_across_instances() {
        assert_eq!(
            hash_with(&KeyState::fx(), "key"),
            hash_with(&KeyState::fx(), "key")
        );
    }
}
