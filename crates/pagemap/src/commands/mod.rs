//! CLI command implementations.

pub(crate) mod generate;
pub(crate) mod resolve;
pub(crate) mod serve;

use std::path::Path;

pub(crate) use generate::GenerateArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use serve::ServeArgs;

use crate::error::CliError;

/// Ensure the `.pagemap/` project directory exists with a `.gitignore`.
pub(crate) fn ensure_project_dir(project_dir: &Path) -> Result<(), CliError> {
    std::fs::create_dir_all(project_dir)
        .map_err(|e| CliError::Server(format!("Failed to create project directory: {e}")))?;

    let gitignore_path = project_dir.join(".gitignore");
    if !gitignore_path.exists() {
        // Auto-create .gitignore like mypy does for .mypy_cache
        let _ = std::fs::write(&gitignore_path, "# Automatically created by pagemap\n*\n");
    }

    Ok(())
}
