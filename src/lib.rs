//! wgo - workspace-aware dependency vendoring for Go source trees
//!
//! This crate provides the core library functionality for wgo: discovering
//! which packages a workspace imports from outside its root, deciding where
//! each one belongs, and driving the external `vendor` tool or copying the
//! packages in directly.

pub mod core;
pub mod ops;
pub mod tools;
pub mod util;

/// Test utilities and fakes for wgo unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides scripted stand-ins for the `go` and
/// `vendor` tools and on-disk Go tree fixtures.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    godeps::LegacyDependency,
    package::{Location, PackageEntry},
    workspace::Workspace,
};

pub use ops::{Resolution, VendorError};
pub use util::context::GlobalContext;
