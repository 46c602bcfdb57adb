//! External tooling invoked after config generation
//!
//! This module provides package-manager selection and dev dependency installation.

pub mod installer;

pub use installer::{InstallOutcome, Installer, PackageManager};
