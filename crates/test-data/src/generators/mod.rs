//! Entity generators for test data.
//!
//! - [`PackageGenerator`]: Generate sensor packages with realistic readings

pub mod package;

pub use package::PackageGenerator;
