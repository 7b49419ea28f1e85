//! High-level operations.
//!
//! This module contains the package discovery and reconciliation core and
//! the implementation of the wgo commands built on it.

pub mod errors;
pub mod invocation;
pub mod probe;
pub mod reconcile;
pub mod resolve;
pub mod wgo_init;
pub mod wgo_restore;
pub mod wgo_save;
pub mod wgo_vendor;

pub use errors::VendorError;
pub use invocation::VendorInvocation;
pub use probe::{ensure_vendor_available, MIN_VENDOR_BUILD};
pub use reconcile::{ignore_dirs, promote_plan, save_mapping, PromoteStep};
pub use resolve::{resolve_external_packages, Resolution, SourceLocator};
pub use wgo_init::init_workspace;
pub use wgo_restore::{restore, RestoreOptions};
pub use wgo_save::{save, SaveOptions, SaveResult};
pub use wgo_vendor::{promote, PromoteOptions};
