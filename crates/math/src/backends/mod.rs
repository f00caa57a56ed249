//! Lane vector backends
//!
//! The portable backend is always compiled. The NEON backend is selected at
//! compile time via the `neon` cargo feature and only exists on aarch64.

// Portable backend (always available)
pub mod portable;

// Platform-specific backends (feature-gated)
#[cfg(feature = "neon")]
pub mod neon;
