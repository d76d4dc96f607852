//! Use cases composed from the resource clients.

pub mod create_order;
pub mod error;

pub use create_order::*;
pub use error::*;
