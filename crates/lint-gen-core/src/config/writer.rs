//! Writing bundle files into the working directory

use crate::error::{LintGenError, Result};
use std::path::Path;
use tokio::fs;

/// Write a single file, creating parent directories and replacing any existing content
pub async fn write_file(path: &Path, content: &str) -> Result<()> {
    let io_err = |source| LintGenError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await.map_err(io_err)?;
        }
    }

    fs::write(path, content).await.map_err(io_err)
}
