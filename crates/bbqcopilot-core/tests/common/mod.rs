use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// Five-step brisket recipe planned for 6:00 PM, as the recipe generator emits it.
pub const BRISKET_RECIPE: &str = r#"{
  "title": "Texas-Style Brisket",
  "eatingTime": "6:00 PM",
  "servings": 10,
  "timeline": [
    {"time": "6:00 AM", "relativeHours": -12, "action": "Trim and season", "details": "Trim fat cap to 1/4 inch"},
    {"time": "7:00 AM", "relativeHours": -11, "action": "Brisket on the smoker", "details": "Fat side up", "temperature": "225°F"},
    {"time": "1:00 PM", "relativeHours": -5, "action": "Wrap the brisket", "details": "Butcher paper", "checkpoints": ["Bark is set", "Internal 165°F"]},
    {"time": "5:00 PM", "relativeHours": -1, "action": "Rest", "details": "In a cooler", "duration": "1 hour"},
    {"time": "6:00 PM", "relativeHours": 0, "action": "Slice and serve", "details": "Against the grain"}
  ]
}"#;

/// Writes the brisket recipe into a fresh temp dir.
pub fn write_recipe() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("recipe.json");
    fs::write(&path, BRISKET_RECIPE).expect("Failed to write recipe");
    (temp_dir, path)
}
