//! Persisted store of named templates
//!
//! The store is a single JSON object on disk: template name to template. Every save reads
//! the whole file, replaces one entry and rewrites the whole file.
//!
//! There is no locking. Two `save` runs racing on the same store can lose one of the
//! updates (the later write wins). lint-gen is a single-operator tool, so this is a known
//! limitation rather than something the store tries to prevent.

use super::Template;
use crate::error::{LintGenError, Result};
use serde_json::{Map, Value};
use std::path::PathBuf;
use tokio::fs;

pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load every entry, treating a missing or unparsable store as empty
    pub async fn load(&self) -> Map<String, Value> {
        let Ok(content) = fs::read_to_string(&self.path).await else {
            return Map::new();
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(entries)) => entries,
            _ => Map::new(),
        }
    }

    /// Load a single template by name
    pub async fn get(&self, name: &str) -> Option<Template> {
        let entry = self.load().await.remove(name)?;
        serde_json::from_value(entry).ok()
    }

    /// Insert or replace `name`, then rewrite the store
    pub async fn save(&self, name: &str, template: &Template) -> Result<()> {
        let mut entries = self.load().await;
        entries.insert(name.to_string(), template.to_value());

        let mut content = serde_json::to_string_pretty(&Value::Object(entries))
            .map_err(|e| self.write_error(std::io::Error::other(e)))?;
        content.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.write_error(e))?;
            }
        }

        fs::write(&self.path, content)
            .await
            .map_err(|e| self.write_error(e))
    }

    fn write_error(&self, source: std::io::Error) -> LintGenError {
        LintGenError::StoreWrite {
            path: self.path.clone(),
            source,
        }
    }
}
