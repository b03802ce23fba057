//! # cvd-ops
//!
//! Color vision accessibility filters.
//!
//! Five named filters are exposed through a fixed [`FilterRegistry`]:
//!
//! | Name | Kernel |
//! |------|--------|
//! | `Original` | [`FilterKernel::Identity`] |
//! | `Deuteranope` | [`FilterKernel::Deuteranope`] |
//! | `Dark` | [`FilterKernel::Dark`] |
//! | `Blue` | [`FilterKernel::Blue`] |
//! | `Yellow` | [`FilterKernel::Yellow`] |
//!
//! Every kernel is a pure per-pixel function. Applying one never fails and
//! never modifies its input; the only error is an unknown filter name.
//!
//! # Modules
//!
//! - [`deuteranope`] - Cone-space simulation of deuteranopia
//! - [`lab_shift`] - Redness-driven shifts in CIE Lab
//! - [`kernel`] - The [`FilterKernel`] enum
//! - [`registry`] - Name lookup
//!
//! # Example
//!
//! ```rust
//! use cvd_core::PixelBuffer;
//!
//! let src = PixelBuffer::filled(4, 4, [200, 50, 50]).unwrap();
//! let out = cvd_ops::apply_named("Deuteranope", &src).unwrap();
//! assert_eq!(out.dimensions(), (4, 4));
//!
//! assert!(cvd_ops::apply_named("Purple", &src).is_err());
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod deuteranope;
pub mod kernel;
pub mod lab_shift;
pub mod registry;

use cvd_core::PixelBuffer;

pub use error::{OpsError, OpsResult};
pub use kernel::FilterKernel;
pub use lab_shift::LabShift;
pub use registry::FilterRegistry;

/// Looks up `name` in the standard registry and applies it to `src`.
pub fn apply_named(name: &str, src: &PixelBuffer) -> OpsResult<PixelBuffer> {
    FilterRegistry::standard().apply(name, src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_named_golden() {
        let src = PixelBuffer::filled(2, 2, [200, 50, 50]).unwrap();
        let out = apply_named("Deuteranope", &src).unwrap();
        for px in out.pixels() {
            assert!(px[0].abs_diff(152) <= 1);
            assert!(px[1].abs_diff(117) <= 1);
            assert!(px[2].abs_diff(36) <= 1);
        }
    }

    #[test]
    fn test_apply_named_unknown() {
        let src = PixelBuffer::filled(1, 1, [0, 0, 0]).unwrap();
        let err = apply_named("Purple", &src).unwrap_err();
        assert!(err.is_unknown_filter());
    }

    #[test]
    fn test_threshold_invariance_all_shifts() {
        let src = PixelBuffer::filled(2, 2, [189, 165, 141]).unwrap();
        for name in ["Dark", "Blue", "Yellow"] {
            assert_eq!(apply_named(name, &src).unwrap(), src, "{name}");
        }
    }
}
