//! Builder for locating and reading recipe documents.

use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    error::{Result, ResultExt, TimelineError},
    models::{Recipe, RecipeDocument},
};

/// File name of the default recipe inside the XDG data directory.
pub const DEFAULT_RECIPE_FILE: &str = "recipe.json";

/// Builder that resolves a recipe path and loads the recipe.
#[derive(Debug, Clone, Default)]
pub struct RecipeLoader {
    recipe_path: Option<PathBuf>,
}

impl RecipeLoader {
    /// Creates a new loader with default settings.
    pub fn new() -> Self {
        Self { recipe_path: None }
    }

    /// Sets a custom recipe file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/bbqcopilot/recipe.json` or
    /// `~/.local/share/bbqcopilot/recipe.json`
    pub fn with_recipe_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.recipe_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// The path [`Self::load`] will read.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::XdgDirectory` if no explicit path was set and
    /// the XDG data directory cannot be resolved.
    pub fn recipe_path(&self) -> Result<PathBuf> {
        match &self.recipe_path {
            Some(path) => Ok(path.clone()),
            None => Self::default_recipe_path(),
        }
    }

    /// Reads and parses the recipe document.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::FileSystem` if the file cannot be read and
    /// `TimelineError::Serialization` if it is not a recipe document.
    pub fn load(&self) -> Result<Recipe> {
        let path = self.recipe_path()?;
        debug!("Loading recipe from {}", path.display());
        let contents = std::fs::read_to_string(&path).fs_context(&path)?;
        let recipe = parse_recipe(&contents)?;
        debug!(
            "Loaded recipe {:?} with {} steps",
            recipe.title,
            recipe.timeline.len()
        );
        Ok(recipe)
    }

    /// Existing recipe from the XDG data dirs, else where it would live in
    /// `$XDG_DATA_HOME`. Nothing is created on disk.
    fn default_recipe_path() -> Result<PathBuf> {
        let dirs = xdg::BaseDirectories::with_prefix("bbqcopilot");
        dirs.find_data_file(DEFAULT_RECIPE_FILE)
            .or_else(|| dirs.get_data_file(DEFAULT_RECIPE_FILE))
            .ok_or_else(|| {
                TimelineError::XdgDirectory("could not determine the data directory".to_string())
            })
    }
}

/// Parses a recipe object or a bare array of steps.
///
/// # Errors
///
/// Returns `TimelineError::Serialization` if `json` is neither shape.
pub fn parse_recipe(json: &str) -> Result<Recipe> {
    Ok(serde_json::from_str::<RecipeDocument>(json)?.into())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("brisket.json");
        fs::write(
            &path,
            r#"{"title": "Brisket", "eatingTime": "6:00 PM", "timeline": [
                {"time": "6:00 AM", "relativeHours": -12, "action": "Trim", "details": ""}
            ]}"#,
        )
        .unwrap();

        let recipe = RecipeLoader::new()
            .with_recipe_path(Some(&path))
            .load()
            .expect("Failed to load recipe");
        assert_eq!(recipe.title.as_deref(), Some("Brisket"));
        assert_eq!(recipe.timeline[0].relative_hours, -12.0);
    }

    #[test]
    fn test_with_recipe_path_none_keeps_default() {
        let loader = RecipeLoader::new().with_recipe_path(None::<&Path>);
        assert!(loader.recipe_path.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing.json");
        let err = RecipeLoader::new()
            .with_recipe_path(Some(&path))
            .load()
            .unwrap_err();
        assert!(matches!(err, TimelineError::FileSystem { .. }));
    }

    #[test]
    fn test_parse_recipe_rejects_bad_json() {
        let err = parse_recipe("{not json").unwrap_err();
        assert!(matches!(err, TimelineError::Serialization { .. }));

        let err = parse_recipe(r#"[{"relativeHours": "soon", "action": "Wait"}]"#).unwrap_err();
        assert!(matches!(err, TimelineError::Serialization { .. }));
    }

    #[test]
    fn test_parse_bare_timeline() {
        let recipe = parse_recipe(r#"[{"relativeHours": -1.5, "action": "Rest"}]"#).unwrap();
        assert!(recipe.eating_time.is_none());
        assert_eq!(recipe.timeline[0].action, "Rest");
    }
}
