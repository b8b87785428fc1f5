//! Allocation-backed types shared by the `std` and `no_std` builds.
//!
//! Everything that needs the heap goes through these aliases so that the rest
//! of the crate never has to spell out the `cfg` split itself.

#[cfg(feature = "std")]
pub type Cow<'a, B> = std::borrow::Cow<'a, B>;
#[cfg(not(feature = "std"))]
pub type Cow<'a, B> = alloc::borrow::Cow<'a, B>;

#[cfg(feature = "std")]
pub type Vec<T> = std::vec::Vec<T>;
#[cfg(not(feature = "std"))]
pub type Vec<T> = alloc::vec::Vec<T>;

#[cfg(feature = "std")]
pub type String = std::string::String;
#[cfg(not(feature = "std"))]
pub type String = alloc::string::String;

#[cfg(feature = "std")]
pub(crate) use std::{format, string::ToString};
#[cfg(not(feature = "std"))]
pub(crate) use alloc::{format, string::ToString};
