//! Core data types.

pub mod godeps;
pub mod package;
pub mod workspace;

pub use godeps::{LegacyDependency, VcsKind};
pub use package::{Location, PackageEntry};
pub use workspace::Workspace;
