//! Command implementations

pub mod formats;
pub mod init;
pub mod parse;
