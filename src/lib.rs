//! Vector normalization transforms.
//!
//! Six normalizers (MinMax, Max, Mean, L1, L2, ZScore) share the
//! [`normalizers::Normalizer`] trait: fit a vector once, then normalize or
//! denormalize single values with the cached statistics. Stateless
//! equivalents live in [`util`].

/// Folder
pub mod normalizers;
pub mod util;

/// Files
pub mod err;

pub mod prelude {
    pub use crate::normalizers::*;
    pub use crate::util::*;
}
