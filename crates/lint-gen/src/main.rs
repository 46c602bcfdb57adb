//! lint-gen CLI - ESLint and Prettier configuration scaffolding

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use lint_gen_core::tui::CliclackPrompter;
use lint_gen_core::{Generator, LintGenError, PackageManager, Prompter, Settings, Tool};

#[derive(Parser, Debug)]
#[command(name = "lint-gen")]
#[command(about = "Generate ESLint and Prettier configuration for JavaScript projects")]
#[command(version)]
pub struct Args {
    /// Package manager used to install dev dependencies (default: npm, or LINT_GEN_PACKAGE_MANAGER)
    #[arg(long = "package-manager", value_enum, global = true)]
    pub package_manager: Option<PackageManager>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively set up linter configurations
    Init,
    /// Generate ESLint configuration
    Eslint(EslintArgs),
    /// Generate Prettier configuration
    Prettier,
    /// Save current linter configs as a custom template
    Save(SaveArgs),
}

#[derive(Parser, Debug)]
pub struct EslintArgs {
    /// Project type (js, typescript, react)
    #[arg(long = "type", default_value = "js")]
    pub project_type: String,
}

#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Template name
    pub name: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let Some(command) = args.command else {
        Args::command().print_help()?;
        println!();
        println!(
            "{}",
            "Use the \"init\" command to start configuring linters!".cyan()
        );
        return Ok(());
    };

    let (settings, warnings) = Settings::from_env(args.package_manager);
    let mut prompter = CliclackPrompter::new();
    for warning in &warnings {
        prompter.warning(warning)?;
    }

    let result = run(command, &settings, &mut prompter).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Err(LintGenError::Cancelled) => {
            let _ = prompter.outro_cancel("Operation cancelled.");
            std::process::exit(130);
        }
        other => Ok(other?),
    }
}

async fn run(
    command: Command,
    settings: &Settings,
    prompter: &mut CliclackPrompter,
) -> Result<(), LintGenError> {
    let generator = Generator::from_settings(settings);

    match command {
        Command::Init => {
            prompter.intro("lint-gen")?;
            generator.init(prompter).await?;
            prompter.outro("Done!")?;
        }
        Command::Eslint(eslint_args) => {
            generator
                .generate(prompter, Tool::Eslint, Some(&eslint_args.project_type))
                .await?;
        }
        Command::Prettier => {
            generator.generate(prompter, Tool::Prettier, None).await?;
        }
        Command::Save(save_args) => {
            lint_gen_core::save_template(settings, &save_args.name).await?;
            println!(
                "{}",
                format!("Template \"{}\" saved!", save_args.name).green()
            );
        }
    }

    Ok(())
}
