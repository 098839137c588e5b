//! Presence gates over the device selection features from Cargo.toml.
//!
//! Each `if_x!` macro wraps a `#[cfg(any(feature = ...))]` over the set of
//! devices carrying peripheral `x`, so code and tests can gate on presence
//! without repeating the device lists. The macros are generated by
//! `tools/feature_tables` from the same tables as the address rules.
//!
//! NOTE: macros are disallowed inside #[cfg(...)], so the macro calls must
//! enclose the gated item or expression themselves.

mod peripherals;
pub(crate) use peripherals::*;
