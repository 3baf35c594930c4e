//! Document check implementations
//!
//! This module contains concrete implementations of the
//! [`DocumentCheck`](crate::check::DocumentCheck) trait. None of them run
//! unless registered on a [`ValidatorConfig`](crate::ValidatorConfig).

mod payload;
mod usage;

pub use payload::PayloadCheck;
pub use usage::UsageCheck;
