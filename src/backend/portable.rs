//! Standard-library implementation.

use super::{KeyState, Kernels};
use crate::resolver::Resolution;

/// Kernels built only on the standard library.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortableKernels;

impl Kernels for PortableKernels {
    fn resolution(&self) -> Resolution {
        Resolution::Portable
    }

    fn name(&self) -> &'static str {
        "portable"
    }

    fn key_state(&self) -> KeyState {
        KeyState::sip()
    }

    fn find_byte(&self, haystack: &[u8], needle: u8) -> Option<usize> {
        haystack.iter().position(|&byte| byte == needle)
    }

    fn find_bytes(&self, haystack: &[u8], needle: &[u8]) -> Option<usize> {
        if needle.is_empty() {
            return Some(0);
        }
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
    }
}
