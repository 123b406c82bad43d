//! Storage initialization
//!
//! Handles first-run setup: directories, settings file and category seed.

use crate::config::paths::PaycyclePaths;
use crate::config::settings::Settings;
use crate::error::PaycycleError;
use crate::models::DefaultCategory;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Returns `true` if anything was created. Existing files are left alone.
pub fn initialize_storage(paths: &PaycyclePaths) -> Result<bool, PaycycleError> {
    paths.ensure_directories()?;
    let mut created = false;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
        created = true;
    }

    if !paths.categories_file().exists() {
        write_json_atomic(paths.categories_file(), &DefaultCategory::seed())?;
        created = true;
    }

    if created {
        tracing::info!(dir = %paths.base_dir().display(), "initialized storage");
    }
    Ok(created)
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &PaycyclePaths) -> bool {
    !paths.settings_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::storage::read_json;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_files_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PaycyclePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        assert!(initialize_storage(&paths).unwrap());
        assert!(!needs_initialization(&paths));

        let categories: Vec<Category> = read_json(paths.categories_file()).unwrap();
        assert_eq!(categories.len(), 6);

        assert!(!initialize_storage(&paths).unwrap());
    }
}
