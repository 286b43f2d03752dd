//! Bookstore application library
//!
//! Service modules and the bootstrap sequence shared by the server binary and the CLI.

pub mod bootstrap;
pub mod modules;

pub use modules::*;
