//! perdiem-core
//!
//! The budget-allocation and month-closing engine. Depends on
//! perdiem-domain. No CLI, no terminal I/O, no direct storage interactions.

pub mod allocation_service;
pub mod closing_service;
pub mod error;
pub mod storage;
pub mod time;

#[cfg(test)]
mod tests;

pub use allocation_service::*;
pub use closing_service::*;
pub use error::CoreError;
pub use storage::StateStorage;
pub use time::{Clock, SystemClock};
