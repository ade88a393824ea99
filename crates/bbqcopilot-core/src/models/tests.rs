use serde_json::json;

use super::*;

#[test]
fn test_step_deserializes_generator_output() {
    let step: TimelineStep = serde_json::from_value(json!({
        "time": "10:00 AM",
        "relativeHours": -8,
        "action": "Wrap the brisket",
        "details": "Wrap tightly in butcher paper",
        "temperature": "250°F",
        "duration": "4 hours",
        "checkpoints": ["Bark is set", "Internal temp 165°F"]
    }))
    .unwrap();

    assert_eq!(step.time, "10:00 AM");
    assert_eq!(step.relative_hours, -8.0);
    assert_eq!(step.temperature.as_deref(), Some("250°F"));
    assert_eq!(step.duration.as_deref(), Some("4 hours"));
    assert_eq!(step.checkpoints.len(), 2);
}

#[test]
fn test_step_serialization_skips_absent_optionals() {
    let step = TimelineStep::new(0.0, "Slice and serve");
    let value = serde_json::to_value(&step).unwrap();

    assert_eq!(value["relativeHours"], json!(0.0));
    assert_eq!(value["action"], json!("Slice and serve"));
    assert!(value.get("temperature").is_none());
    assert!(value.get("duration").is_none());
    assert!(value.get("checkpoints").is_none());
}

#[test]
fn test_recipe_document_accepts_object_and_array() {
    let object: RecipeDocument = serde_json::from_value(json!({
        "title": "Pulled Pork",
        "eatingTime": "7:00 PM",
        "servings": 8,
        "timeline": [{"relativeHours": -10, "action": "Light the smoker"}]
    }))
    .unwrap();
    let recipe = Recipe::from(object);
    assert_eq!(recipe.title.as_deref(), Some("Pulled Pork"));
    assert_eq!(recipe.eating_time.as_deref(), Some("7:00 PM"));
    assert_eq!(recipe.timeline.len(), 1);
    assert_eq!(recipe.timeline[0].time, "");

    let array: RecipeDocument = serde_json::from_value(json!([
        {"relativeHours": -2, "action": "Rest"},
        {"relativeHours": 0, "action": "Serve"}
    ]))
    .unwrap();
    let recipe = Recipe::from(array);
    assert!(recipe.title.is_none());
    assert_eq!(recipe.timeline.len(), 2);
}

#[test]
fn test_time_until_start_from_difference() {
    let ahead = TimeUntilStart::from_difference(135);
    assert_eq!(
        ahead,
        TimeUntilStart {
            hours: 2,
            minutes: 15,
            is_past: false
        }
    );

    let behind = TimeUntilStart::from_difference(-61);
    assert_eq!(behind.hours, 1);
    assert_eq!(behind.minutes, 1);
    assert!(behind.is_past);
    assert_eq!(behind.total_minutes(), 61);

    assert!(!TimeUntilStart::from_difference(0).is_past);
}
