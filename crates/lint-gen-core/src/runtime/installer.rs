//! Dev dependency installation through an external package manager
//!
//! The package manager runs in the foreground with the terminal's stdio so the operator
//! sees install progress live. There is no timeout: a hung install has to be interrupted
//! by the operator, which leaves already written config files in place.

use crate::error::LintGenError;
use colored::Colorize;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Some(PackageManager::Npm),
            "yarn" => Some(PackageManager::Yarn),
            "pnpm" => Some(PackageManager::Pnpm),
            "bun" => Some(PackageManager::Bun),
            _ => None,
        }
    }

    /// Arguments that add `deps` as development dependencies
    pub fn add_dev_args(&self, deps: &[&str]) -> Vec<String> {
        let deps = deps.iter().map(|d| d.to_string());
        match self {
            PackageManager::Npm => std::iter::once("install".to_string())
                .chain(deps)
                .chain(std::iter::once("--save-dev".to_string()))
                .collect(),
            PackageManager::Yarn | PackageManager::Bun => ["add", "--dev"]
                .iter()
                .map(|s| s.to_string())
                .chain(deps)
                .collect(),
            PackageManager::Pnpm => ["add", "--save-dev"]
                .iter()
                .map(|s| s.to_string())
                .chain(deps)
                .collect(),
        }
    }
}

/// Result of an install attempt
#[derive(Debug)]
pub enum InstallOutcome {
    Installed,
    Failed(LintGenError),
}

/// Runs the package manager for a list of dependencies
#[derive(Debug, Clone)]
pub struct Installer {
    program: String,
    package_manager: PackageManager,
}

impl Installer {
    pub fn new(package_manager: PackageManager) -> Self {
        Self {
            program: package_manager.program().to_string(),
            package_manager,
        }
    }

    /// Use a different executable while keeping the package manager's argument style
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// The full command line, as shown to the operator
    pub fn command_line(&self, deps: &[&str]) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.package_manager.add_dev_args(deps));
        parts.join(" ")
    }

    /// Install the dependencies, blocking until the package manager exits
    pub async fn install(&self, deps: &[&str]) -> InstallOutcome {
        let cmd = self.command_line(deps);
        println!("{}", "Installing dependencies...".blue());
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        println!();

        let status = TokioCommand::new(&self.program)
            .args(self.package_manager.add_dev_args(deps))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await;

        let outcome = match status {
            Ok(status) if status.success() => InstallOutcome::Installed,
            Ok(status) => InstallOutcome::Failed(LintGenError::InstallStatus {
                command: cmd.clone(),
                code: status.code().unwrap_or(-1),
            }),
            Err(source) => InstallOutcome::Failed(LintGenError::InstallSpawn {
                command: cmd.clone(),
                source,
            }),
        };

        println!();
        match &outcome {
            InstallOutcome::Installed => {
                println!("{}", "Dependencies installed successfully!".green());
            }
            InstallOutcome::Failed(e) => {
                println!(
                    "{}",
                    "Failed to install dependencies. Please install manually.".red()
                );
                println!("  {}", e);
                println!("  {} {}", "Manual command:".dimmed(), cmd);
            }
        }

        outcome
    }
}
