//! # rscalc
//!
//! A basic arithmetic calculator: a fixed set of stateless mathematical
//! operations plus an append-only operation log for a subset of them.
//!
//! The library surface is [`Calculator`] with its operation set and history
//! accessors. Domain violations (division by zero, negative square root,
//! negative factorial) surface immediately as [`CalcError::InvalidArgument`];
//! there is no internal recovery. The crate also ships a small demonstration
//! binary, which is not part of the library contract.

pub mod calculator;
pub mod cli;
pub mod errors;
pub mod exitcode;
pub mod util;

pub use calculator::Calculator;
pub use errors::{CalcError, CalcResult};
