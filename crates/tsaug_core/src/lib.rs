//! # tsaug_core
//!
//! Core types for the tsaug-rs time series augmentation engine.
//!
//! This crate provides:
//! - [`Dataset`] for labeled univariate time series batches
//! - [`Seed`] for deterministic, per-row-derivable random number generation
//! - [`CoreError`] and the [`Result`] alias shared by the whole workspace

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod dataset;
mod error;
mod seed;

pub use dataset::Dataset;
pub use error::{CoreError, Result};
pub use seed::Seed;
