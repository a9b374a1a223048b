//! Command implementations for the Graymill CLI.

pub mod config;
pub mod inspect;
pub mod process;
