//! Config bundles and their generation
//!
//! This module provides:
//! - The static catalog of ESLint and Prettier bundles
//! - Writing bundle files into the working directory
//! - The confirm, write, install generation flow

pub mod catalog;
pub mod generator;
pub mod writer;

pub use catalog::{lookup, BundleKey, ConfigBundle, EslintVariant, ProjectType, Tool};
pub use generator::{GenerateOutcome, Generator};
