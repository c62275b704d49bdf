//! Command implementations

pub mod simple;
pub mod stdio;

pub use simple::run_simple;
pub use stdio::run_stdio;
