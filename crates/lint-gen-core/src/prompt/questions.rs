//! Questions asked by `init`

use super::{Answers, Question, QuestionKind};
use crate::config::catalog::{ProjectType, Tool};

const LINTER_KEY: &str = "linter";
const PROJECT_TYPE_KEY: &str = "projectType";

const LINTER_CHOICES: &[&str] = &["ESLint", "Prettier", "Both"];
const PROJECT_TYPE_CHOICES: &[&str] = &[
    ProjectType::JavaScript.display_name(),
    ProjectType::TypeScript.display_name(),
    ProjectType::React.display_name(),
];

/// Which tools `init` should configure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linter {
    Eslint,
    Prettier,
    Both,
}

impl Linter {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "ESLint" => Some(Linter::Eslint),
            "Prettier" => Some(Linter::Prettier),
            "Both" => Some(Linter::Both),
            _ => None,
        }
    }

    pub fn includes_eslint(&self) -> bool {
        matches!(self, Linter::Eslint | Linter::Both)
    }

    pub fn includes_prettier(&self) -> bool {
        matches!(self, Linter::Prettier | Linter::Both)
    }

    /// Tools to generate, ESLint first
    pub fn tools(&self) -> Vec<Tool> {
        let mut tools = Vec::new();
        if self.includes_eslint() {
            tools.push(Tool::Eslint);
        }
        if self.includes_prettier() {
            tools.push(Tool::Prettier);
        }
        tools
    }
}

fn wants_eslint(answers: &Answers) -> bool {
    answers
        .choice(LINTER_KEY)
        .and_then(Linter::from_label)
        .is_some_and(|linter| linter.includes_eslint())
}

/// The ordered `init` questionnaire
pub fn init_questions() -> [Question; 2] {
    [
        Question {
            key: LINTER_KEY,
            message: "Which linter/formatter to configure?",
            kind: QuestionKind::Select {
                choices: LINTER_CHOICES,
            },
            when: None,
        },
        Question {
            key: PROJECT_TYPE_KEY,
            message: "What type of project?",
            kind: QuestionKind::Select {
                choices: PROJECT_TYPE_CHOICES,
            },
            when: Some(wants_eslint),
        },
    ]
}

/// Typed view of the `init` answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitAnswers {
    pub linter: Linter,
    /// Only present when ESLint was selected
    pub project_type: Option<ProjectType>,
}

impl InitAnswers {
    pub fn from_answers(answers: &Answers) -> Option<Self> {
        let linter = answers.choice(LINTER_KEY).and_then(Linter::from_label)?;
        let project_type = answers
            .choice(PROJECT_TYPE_KEY)
            .and_then(ProjectType::from_label);
        Some(Self {
            linter,
            project_type,
        })
    }
}
