//! Core library for the `fresh` CLI.
//!
//! Finds branches whose head commit still matches the head of a recently
//! closed pull request and deletes them. The library never terminates the
//! process; every failure surfaces as a [`FreshError`] for the binary to
//! report.

pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod sweep;

pub use error::{FreshError, Result};
