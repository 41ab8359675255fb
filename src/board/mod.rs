//! Board client abstraction.
//!
//! # Architecture
//!
//! - `client`: the [`BoardClient`] trait the workflows are written against
//! - `error`: error types, with `NotFound` as the recoverable signal
//! - `models`: Planka wire entities
//! - `palette`: label colours the service accepts
//! - `planka`: reqwest-backed implementation talking to a Planka server

mod client;
mod error;
mod models;
pub mod palette;
mod planka;

#[cfg(test)]
pub(crate) mod fake;

#[cfg(test)]
mod error_test;

pub use client::BoardClient;
pub use error::{BoardError, BoardResult};
pub use models::*;
pub use planka::{PlankaBoard, PlankaClient};
