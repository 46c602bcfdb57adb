//! lint-gen core - ESLint and Prettier configuration scaffolding
//!
//! This library holds everything behind the `lint-gen` binary: the built-in config
//! bundles, the confirm/write/install generation flow, and the named template store.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - The static bundle catalog, file writing, dependency
//!   installation and the template store
//! - **Layer 2: Workflow Orchestration** - `Generator`, driven through the `Prompter` trait
//!   so flows can run against a terminal or a script
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompter (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based `CliclackPrompter`
//!
//! # Example Usage
//!
//! ```ignore
//! use lint_gen_core::{Generator, Settings, Tool};
//! use lint_gen_core::tui::CliclackPrompter;
//!
//! let (settings, _warnings) = Settings::from_env(None);
//! let generator = Generator::from_settings(&settings);
//! generator
//!     .generate(&mut CliclackPrompter::new(), Tool::Eslint, Some("react"))
//!     .await?;
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod runtime;
pub mod settings;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{lookup, BundleKey, ConfigBundle, GenerateOutcome, Generator, ProjectType, Tool};
pub use error::LintGenError;
pub use prompt::{ask, Prompter, Question, QuestionKind};
pub use runtime::{InstallOutcome, Installer, PackageManager};
pub use settings::Settings;
pub use templates::{save_template, Template, TemplateStore};
