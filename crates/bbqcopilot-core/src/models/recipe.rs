//! Recipe document model.
//!
//! Recipes are produced and stored elsewhere; only the fields the timeline
//! engine reads are modelled here. Unknown fields are ignored on read.

use serde::{Deserialize, Serialize};

use super::TimelineStep;

/// The parts of a recipe the timeline engine works with.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe title, e.g. "Texas-Style Brisket"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Serving time the stored timeline was generated for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eating_time: Option<String>,

    /// Ordered cook steps
    #[serde(default)]
    pub timeline: Vec<TimelineStep>,
}

/// Accepted on-disk shapes: a full recipe object or a bare step array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecipeDocument {
    Recipe(Recipe),
    Timeline(Vec<TimelineStep>),
}

impl From<RecipeDocument> for Recipe {
    fn from(doc: RecipeDocument) -> Self {
        match doc {
            RecipeDocument::Recipe(recipe) => recipe,
            RecipeDocument::Timeline(timeline) => Recipe {
                timeline,
                ..Recipe::default()
            },
        }
    }
}
