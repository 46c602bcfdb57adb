//! Named templates: snapshots of the config files in the working directory
//!
//! This module provides:
//! - The `Template` type (file name to content)
//! - Snapshotting the well-known config files from a directory
//! - The persisted `TemplateStore`

pub mod store;

use crate::error::Result;
use crate::settings::Settings;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

pub use store::TemplateStore;

/// Config files captured by a template, in capture order
pub const TEMPLATE_FILES: &[&str] = &[
    ".eslintrc.json",
    ".prettierrc",
    ".eslintignore",
    ".prettierignore",
];

/// File name to file content, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template {
    files: Map<String, Value>,
}

impl Template {
    pub fn insert(&mut self, name: &str, content: &str) {
        self.files
            .insert(name.to_string(), Value::String(content.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.files.get(name).and_then(Value::as_str)
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.files.clone())
    }
}

/// Read the well-known config files from `dir`
///
/// Files that are missing or unreadable are left out of the template. Invalid UTF-8 is
/// kept, with the bad bytes replaced by U+FFFD.
pub async fn snapshot(dir: &Path) -> Template {
    let mut template = Template::default();

    for name in TEMPLATE_FILES {
        if let Ok(bytes) = fs::read(dir.join(name)).await {
            template.insert(name, &String::from_utf8_lossy(&bytes));
        }
    }

    template
}

/// Snapshot the working directory and store it under `name`
pub async fn save_template(settings: &Settings, name: &str) -> Result<Template> {
    let store = TemplateStore::new(settings.require_store_path()?);
    let template = snapshot(&settings.working_dir).await;
    store.save(name, &template).await?;
    Ok(template)
}
