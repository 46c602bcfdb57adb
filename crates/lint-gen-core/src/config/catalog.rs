//! Built-in ESLint and Prettier configuration bundles

use crate::error::{LintGenError, Result};
use std::fmt;

/// Tools that lint-gen can configure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Eslint,
    Prettier,
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Eslint => "eslint",
            Tool::Prettier => "prettier",
        }
    }

    /// Parse a tool name as typed on the command line
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "eslint" => Ok(Tool::Eslint),
            "prettier" => Ok(Tool::Prettier),
            _ => Err(LintGenError::UnsupportedTool {
                tool: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Project types offered by `init` and accepted by `eslint --type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    JavaScript,
    TypeScript,
    React,
}

impl ProjectType {
    pub const ALL: [ProjectType; 3] = [
        ProjectType::JavaScript,
        ProjectType::TypeScript,
        ProjectType::React,
    ];

    pub const fn display_name(&self) -> &'static str {
        match self {
            ProjectType::JavaScript => "JavaScript",
            ProjectType::TypeScript => "TypeScript",
            ProjectType::React => "React",
        }
    }

    /// The lower-case key passed to the catalog
    pub fn key(&self) -> &'static str {
        match self {
            ProjectType::JavaScript => "js",
            ProjectType::TypeScript => "typescript",
            ProjectType::React => "react",
        }
    }

    /// Parse a catalog key (`js`, `typescript`, `react`), case-insensitively
    pub fn from_key(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|p| p.key() == s)
    }

    /// Parse a display label as offered by `init`
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.display_name() == label)
    }
}

/// ESLint variants that have a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EslintVariant {
    Js,
    React,
}

impl EslintVariant {
    pub fn key(&self) -> &'static str {
        match self {
            EslintVariant::Js => "js",
            EslintVariant::React => "react",
        }
    }

    /// TypeScript has no bundle yet, so it maps to `None`
    pub fn for_project(project: ProjectType) -> Option<Self> {
        match project {
            ProjectType::JavaScript => Some(EslintVariant::Js),
            ProjectType::React => Some(EslintVariant::React),
            ProjectType::TypeScript => None,
        }
    }
}

/// Fully resolved catalog key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BundleKey {
    Eslint(EslintVariant),
    Prettier,
}

impl BundleKey {
    pub fn tool(&self) -> Tool {
        match self {
            BundleKey::Eslint(_) => Tool::Eslint,
            BundleKey::Prettier => Tool::Prettier,
        }
    }

    /// Variant label used in prompts ("js", "react" or "default")
    pub fn variant_label(&self) -> &'static str {
        match self {
            BundleKey::Eslint(variant) => variant.key(),
            BundleKey::Prettier => "default",
        }
    }
}

/// Files and dev dependencies for one (tool, variant) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigBundle {
    /// `(file name, content)` pairs, in write order
    pub files: &'static [(&'static str, &'static str)],
    pub dependencies: &'static [&'static str],
}

impl ConfigBundle {
    pub fn file(&self, name: &str) -> Option<&'static str> {
        self.files
            .iter()
            .find(|(file, _)| *file == name)
            .map(|(_, content)| *content)
    }
}

const ESLINTRC_JS: &str = r#"{
  "env": {
    "browser": true,
    "es2021": true,
    "node": true
  },
  "extends": [
    "standard"
  ],
  "parserOptions": {
    "ecmaVersion": 12,
    "sourceType": "module"
  },
  "rules": {
    "semi": [
      "error",
      "always"
    ],
    "quotes": [
      "error",
      "single"
    ]
  }
}"#;

const ESLINTRC_REACT: &str = r#"{
  "env": {
    "browser": true,
    "es2021": true
  },
  "extends": [
    "plugin:react/recommended",
    "standard"
  ],
  "parserOptions": {
    "ecmaVersion": 12,
    "sourceType": "module"
  },
  "plugins": [
    "react"
  ],
  "rules": {
    "react/prop-types": "off",
    "semi": [
      "error",
      "always"
    ]
  }
}"#;

const PRETTIERRC: &str = r#"{
  "semi": true,
  "trailingComma": "es5",
  "singleQuote": true,
  "printWidth": 80,
  "tabWidth": 2
}"#;

static ESLINT_JS: ConfigBundle = ConfigBundle {
    files: &[
        (".eslintrc.json", ESLINTRC_JS),
        (".eslintignore", "node_modules\ncoverage\n"),
    ],
    dependencies: &["eslint", "eslint-config-standard"],
};

static ESLINT_REACT: ConfigBundle = ConfigBundle {
    files: &[
        (".eslintrc.json", ESLINTRC_REACT),
        (".eslintignore", "node_modules\ncoverage\nbuild\n"),
    ],
    dependencies: &["eslint", "eslint-config-standard", "eslint-plugin-react"],
};

static PRETTIER_DEFAULT: ConfigBundle = ConfigBundle {
    files: &[
        (".prettierrc", PRETTIERRC),
        (".prettierignore", "node_modules\ncoverage\nbuild\n"),
    ],
    dependencies: &["prettier"],
};

/// Look up the bundle for a resolved key
pub fn bundle(key: BundleKey) -> &'static ConfigBundle {
    match key {
        BundleKey::Eslint(EslintVariant::Js) => &ESLINT_JS,
        BundleKey::Eslint(EslintVariant::React) => &ESLINT_REACT,
        BundleKey::Prettier => &PRETTIER_DEFAULT,
    }
}

/// Resolve a tool and a free-form variant string into a catalog key
///
/// ESLint variants are matched case-insensitively. Prettier ignores the variant.
pub fn resolve(tool: Tool, variant: Option<&str>) -> Result<BundleKey> {
    match tool {
        Tool::Prettier => Ok(BundleKey::Prettier),
        Tool::Eslint => {
            let requested = variant.unwrap_or("js");
            ProjectType::from_key(requested)
                .and_then(EslintVariant::for_project)
                .map(BundleKey::Eslint)
                .ok_or_else(|| LintGenError::InvalidVariant {
                    tool: tool.name().to_string(),
                    variant: requested.to_string(),
                })
        }
    }
}

/// Resolve and fetch in one step
pub fn lookup(tool: Tool, variant: Option<&str>) -> Result<(BundleKey, &'static ConfigBundle)> {
    let key = resolve(tool, variant)?;
    Ok((key, bundle(key)))
}
