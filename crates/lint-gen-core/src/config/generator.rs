//! Config generation: resolve a bundle, confirm, write it, then offer to install

use crate::config::catalog::{self, Tool};
use crate::config::writer;
use crate::error::{LintGenError, Result};
use crate::prompt::{self, init_questions, InitAnswers, Prompter};
use crate::runtime::{InstallOutcome, Installer};
use crate::settings::Settings;
use std::path::PathBuf;

/// What a single `generate` call did
#[derive(Debug)]
pub enum GenerateOutcome {
    /// No bundle exists for the requested tool and variant; nothing was written
    Unsupported(LintGenError),
    /// The operator declined to generate; nothing was written
    Declined,
    Generated {
        written: Vec<PathBuf>,
        failed: Vec<LintGenError>,
        /// `None` when there was nothing to install or the operator declined
        install: Option<InstallOutcome>,
    },
}

impl GenerateOutcome {
    pub fn written(&self) -> &[PathBuf] {
        match self {
            GenerateOutcome::Generated { written, .. } => written,
            _ => &[],
        }
    }
}

/// Generates config bundles into a working directory
pub struct Generator {
    working_dir: PathBuf,
    installer: Installer,
}

impl Generator {
    pub fn new(working_dir: impl Into<PathBuf>, installer: Installer) -> Self {
        Self {
            working_dir: working_dir.into(),
            installer,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.working_dir.clone(),
            Installer::new(settings.package_manager),
        )
    }

    /// Generate the bundle for `tool`, asking before any side effect
    ///
    /// Missing bundles and declined prompts are reported and returned as outcomes. Only a
    /// cancelled or broken prompt is an error.
    pub async fn generate<P: Prompter + ?Sized>(
        &self,
        prompter: &mut P,
        tool: Tool,
        variant: Option<&str>,
    ) -> Result<GenerateOutcome> {
        let (key, bundle) = match catalog::lookup(tool, variant) {
            Ok(found) => found,
            Err(e) => {
                prompter.error(&e.to_string())?;
                return Ok(GenerateOutcome::Unsupported(e));
            }
        };

        let confirmed = prompter.confirm(
            &format!("Generate {} config for {}?", tool, key.variant_label()),
            true,
        )?;
        if !confirmed {
            return Ok(GenerateOutcome::Declined);
        }

        let mut written = Vec::new();
        let mut failed = Vec::new();
        // A failed file is reported and skipped; the rest of the bundle is still written
        for (name, content) in bundle.files {
            let target_path = self.working_dir.join(name);
            match writer::write_file(&target_path, content).await {
                Ok(()) => {
                    prompter.success(&format!("Created {}", name))?;
                    written.push(target_path);
                }
                Err(e) => {
                    prompter.error(&e.to_string())?;
                    failed.push(e);
                }
            }
        }

        let mut install = None;
        if !bundle.dependencies.is_empty() {
            let accepted = prompter.confirm("Install required dependencies?", true)?;
            if accepted {
                install = Some(self.installer.install(bundle.dependencies).await);
            }
        }

        Ok(GenerateOutcome::Generated {
            written,
            failed,
            install,
        })
    }

    /// Ask which tools to configure, then generate each of them in turn
    pub async fn init<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<Vec<GenerateOutcome>> {
        let answers = prompt::ask(prompter, &init_questions())?;
        let Some(init) = InitAnswers::from_answers(&answers) else {
            return Ok(Vec::new());
        };

        let mut outcomes = Vec::new();
        for tool in init.linter.tools() {
            let variant = match tool {
                Tool::Eslint => init.project_type.map(|p| p.key()),
                Tool::Prettier => None,
            };
            outcomes.push(self.generate(prompter, tool, variant).await?);
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::catalog::{bundle, BundleKey, EslintVariant};
    use crate::prompt::testing::{Reply, ScriptedPrompter};
    use crate::runtime::PackageManager;
    use tempfile::TempDir;

    fn generator(dir: &TempDir) -> Generator {
        Generator::new(
            dir.path(),
            Installer::new(PackageManager::Npm).with_program("lint-gen-test-missing-npm"),
        )
    }

    fn file_names(dir: &TempDir) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_generated_files_match_catalog() {
        let dir = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new([Reply::Confirm(true), Reply::Confirm(false)]);

        let outcome = generator(&dir)
            .generate(&mut prompter, Tool::Eslint, Some("js"))
            .await
            .unwrap();

        assert_eq!(outcome.written().len(), 2);
        for (name, content) in bundle(BundleKey::Eslint(EslintVariant::Js)).files {
            assert_eq!(std::fs::read_to_string(dir.path().join(name)).unwrap(), *content);
        }
        assert!(prompter.logged("Created .eslintrc.json"));
        assert!(prompter.logged("Created .eslintignore"));
        assert_eq!(
            prompter.asked,
            vec!["Generate eslint config for js?", "Install required dependencies?"]
        );
    }

    #[tokio::test]
    async fn test_regenerating_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let gen = generator(&dir);

        for _ in 0..2 {
            let mut prompter =
                ScriptedPrompter::new([Reply::Confirm(true), Reply::Confirm(false)]);
            gen.generate(&mut prompter, Tool::Prettier, None).await.unwrap();
        }

        assert_eq!(file_names(&dir), vec![".prettierignore", ".prettierrc"]);
        for (name, content) in bundle(BundleKey::Prettier).files {
            assert_eq!(std::fs::read_to_string(dir.path().join(name)).unwrap(), *content);
        }
    }

    #[tokio::test]
    async fn test_unsupported_variant_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new([]);

        let outcome = generator(&dir)
            .generate(&mut prompter, Tool::Eslint, Some("typescript"))
            .await
            .unwrap();

        assert!(matches!(outcome, GenerateOutcome::Unsupported(_)));
        assert!(file_names(&dir).is_empty());
        assert!(prompter.asked.is_empty());
        assert!(prompter.logged("error: Invalid config type for eslint: typescript"));
    }

    #[tokio::test]
    async fn test_declining_leaves_directory_untouched() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".eslintrc.json"), "{\"custom\": true}").unwrap();
        let mut prompter = ScriptedPrompter::new([Reply::Confirm(false)]);

        let outcome = generator(&dir)
            .generate(&mut prompter, Tool::Eslint, Some("react"))
            .await
            .unwrap();

        assert!(matches!(outcome, GenerateOutcome::Declined));
        assert_eq!(file_names(&dir), vec![".eslintrc.json"]);
        assert_eq!(
            std::fs::read_to_string(dir.path().join(".eslintrc.json")).unwrap(),
            "{\"custom\": true}"
        );
        assert_eq!(prompter.remaining(), 0);
    }

    #[tokio::test]
    async fn test_react_and_default_differ() {
        let dir = TempDir::new().unwrap();
        let gen = generator(&dir);

        let mut prompter = ScriptedPrompter::new([Reply::Confirm(true), Reply::Confirm(false)]);
        gen.generate(&mut prompter, Tool::Eslint, Some("react")).await.unwrap();
        let rc: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join(".eslintrc.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(rc["plugins"], serde_json::json!(["react"]));
        let ignore = std::fs::read_to_string(dir.path().join(".eslintignore")).unwrap();
        assert!(ignore.lines().any(|l| l == "build"));

        let mut prompter = ScriptedPrompter::new([Reply::Confirm(true), Reply::Confirm(false)]);
        gen.generate(&mut prompter, Tool::Eslint, None).await.unwrap();
        let rc: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(dir.path().join(".eslintrc.json")).unwrap(),
        )
        .unwrap();
        assert!(rc.get("plugins").is_none());
        let ignore = std::fs::read_to_string(dir.path().join(".eslintignore")).unwrap();
        assert!(!ignore.lines().any(|l| l == "build"));
    }

    #[tokio::test]
    async fn test_install_failure_keeps_written_files() {
        let dir = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new([Reply::Confirm(true), Reply::Confirm(true)]);

        let outcome = generator(&dir)
            .generate(&mut prompter, Tool::Prettier, None)
            .await
            .unwrap();

        match outcome {
            GenerateOutcome::Generated {
                written, install, ..
            } => {
                assert_eq!(written.len(), 2);
                assert!(matches!(
                    install,
                    Some(InstallOutcome::Failed(LintGenError::InstallSpawn { .. }))
                ));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(file_names(&dir), vec![".prettierignore", ".prettierrc"]);
    }

    #[tokio::test]
    async fn test_alias_variant_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new([]);

        let outcome = generator(&dir)
            .generate(&mut prompter, Tool::Eslint, Some("javascript"))
            .await
            .unwrap();

        assert!(matches!(outcome, GenerateOutcome::Unsupported(_)));
        assert!(file_names(&dir).is_empty());
        assert!(prompter.logged("error: Invalid config type for eslint: javascript"));
    }

    #[tokio::test]
    async fn test_failed_write_still_offers_install() {
        let dir = TempDir::new().unwrap();
        // A directory in the way of the first file makes that write fail
        std::fs::create_dir(dir.path().join(".eslintrc.json")).unwrap();
        let mut prompter = ScriptedPrompter::new([Reply::Confirm(true), Reply::Confirm(true)]);

        let outcome = generator(&dir)
            .generate(&mut prompter, Tool::Eslint, Some("js"))
            .await
            .unwrap();

        match outcome {
            GenerateOutcome::Generated {
                written,
                failed,
                install,
            } => {
                assert_eq!(failed.len(), 1);
                assert!(matches!(failed[0], LintGenError::FileWrite { .. }));
                assert_eq!(written, vec![dir.path().join(".eslintignore")]);
                assert!(install.is_some());
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(prompter.asked[1], "Install required dependencies?");
        assert!(prompter.logged("error: Failed to write"));
        assert!(prompter.logged("success: Created .eslintignore"));
        assert_eq!(
            std::fs::read_to_string(dir.path().join(".eslintignore")).unwrap(),
            "node_modules\ncoverage\n"
        );
    }

    #[tokio::test]
    async fn test_each_file_is_reported_in_bundle_order() {
        let dir = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new([Reply::Confirm(true), Reply::Confirm(false)]);

        generator(&dir)
            .generate(&mut prompter, Tool::Eslint, Some("react"))
            .await
            .unwrap();

        assert_eq!(
            prompter.log,
            vec![
                "success: Created .eslintrc.json",
                "success: Created .eslintignore"
            ]
        );
    }

    #[tokio::test]
    async fn test_cancel_at_confirmation_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new([Reply::Cancel]);

        let err = generator(&dir)
            .generate(&mut prompter, Tool::Prettier, None)
            .await
            .unwrap_err();

        assert!(matches!(err, LintGenError::Cancelled));
        assert!(file_names(&dir).is_empty());
    }

    #[tokio::test]
    async fn test_init_both_generates_eslint_then_prettier() {
        let dir = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new([
            Reply::Select(2), // Both
            Reply::Select(2), // React
            Reply::Confirm(true),
            Reply::Confirm(false),
            Reply::Confirm(true),
            Reply::Confirm(false),
        ]);

        let outcomes = generator(&dir).init(&mut prompter).await.unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(
            file_names(&dir),
            vec![".eslintignore", ".eslintrc.json", ".prettierignore", ".prettierrc"]
        );
        assert_eq!(prompter.asked[2], "Generate eslint config for react?");
        assert_eq!(prompter.asked[4], "Generate prettier config for default?");
    }

    #[tokio::test]
    async fn test_init_typescript_reports_and_continues() {
        let dir = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new([
            Reply::Select(2), // Both
            Reply::Select(1), // TypeScript
            Reply::Confirm(true),
            Reply::Confirm(false),
        ]);

        let outcomes = generator(&dir).init(&mut prompter).await.unwrap();

        assert!(matches!(outcomes[0], GenerateOutcome::Unsupported(_)));
        assert_eq!(file_names(&dir), vec![".prettierignore", ".prettierrc"]);
    }

    #[tokio::test]
    async fn test_init_javascript_uses_js_bundle() {
        let dir = TempDir::new().unwrap();
        let mut prompter = ScriptedPrompter::new([
            Reply::Select(0), // ESLint
            Reply::Select(0), // JavaScript
            Reply::Confirm(true),
            Reply::Confirm(false),
        ]);

        generator(&dir).init(&mut prompter).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(dir.path().join(".eslintignore")).unwrap(),
            "node_modules\ncoverage\n"
        );
    }
}
