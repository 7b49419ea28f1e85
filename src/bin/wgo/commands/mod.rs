//! Command implementations

pub mod init;
pub mod restore;
pub mod save;
pub mod vendor;
