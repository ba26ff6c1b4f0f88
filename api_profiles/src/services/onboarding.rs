use common::error::{AppError, Res};
use serde_json::Value;

/// Vendor wizard: business basics, location, details & media, review.
pub const VENDOR_STEPS: i32 = 4;
/// Couple wizard: partners, wedding details, visibility.
pub const COUPLE_STEPS: i32 = 3;

pub fn step_count(role: &str) -> Res<i32> {
    match role {
        "vendor" => Ok(VENDOR_STEPS),
        "couple" => Ok(COUPLE_STEPS),
        other => Err(AppError::BadRequest(format!("Unknown role: {}", other))),
    }
}

/// Required fields gating "Continue" on a step. Steps without an entry
/// have no gate.
fn required_fields(role: &str, step: i32) -> &'static [&'static str] {
    match (role, step) {
        ("vendor", 1) => &["business_name", "category"],
        ("vendor", 2) => &["city"],
        ("couple", 1) => &["partner_one", "partner_two"],
        _ => &[],
    }
}

/// Gated fields that are absent or blank in the draft data.
pub fn missing_for_step(role: &str, step: i32, data: &Value) -> Vec<&'static str> {
    required_fields(role, step)
        .iter()
        .filter(|field| {
            !data
                .get(**field)
                .and_then(Value::as_str)
                .is_some_and(|value| !value.trim().is_empty())
        })
        .copied()
        .collect()
}

/// A draft saved at `step` has passed every earlier step's gate; moving
/// forward without the gated fields is rejected with a `details` map of
/// the offending fields.
pub fn validate_progress(role: &str, step: i32, data: &Value) -> Res<()> {
    let steps = step_count(role)?;
    if step < 1 || step > steps {
        return Err(AppError::BadRequest(format!(
            "Step must be between 1 and {}",
            steps
        )));
    }

    let mut details = serde_json::Map::new();
    for passed_step in 1..step {
        for field in missing_for_step(role, passed_step, data) {
            details.insert(field.to_string(), Value::Bool(true));
        }
    }

    if details.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(Value::Object(details)))
    }
}

/// Completion re-checks every gated step against the final payload.
pub fn validate_completion(role: &str, data: &Value) -> Res<()> {
    let steps = step_count(role)?;

    let mut details = serde_json::Map::new();
    for step in 1..=steps {
        for field in missing_for_step(role, step, data) {
            details.insert(field.to_string(), Value::Bool(true));
        }
    }

    if details.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(Value::Object(details)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn first_step_accepts_an_empty_draft() {
        assert!(validate_progress("vendor", 1, &json!({})).is_ok());
        assert!(validate_progress("couple", 1, &json!({})).is_ok());
    }

    #[test]
    fn advancing_past_a_gate_requires_its_fields() {
        let err = validate_progress("vendor", 2, &json!({"category": "florist"}));
        match err {
            Err(AppError::Validation(details)) => {
                assert_eq!(details["business_name"], true);
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn blank_values_do_not_pass_a_gate() {
        let data = json!({"business_name": "  ", "category": "florist"});
        assert!(validate_progress("vendor", 2, &data).is_err());
    }

    #[test]
    fn complete_vendor_draft_reaches_the_last_step() {
        let data = json!({
            "business_name": "Petal & Stem",
            "category": "florist",
            "city": "Portland"
        });
        assert!(validate_progress("vendor", VENDOR_STEPS, &data).is_ok());
        assert!(validate_completion("vendor", &data).is_ok());
    }

    #[test]
    fn couple_gate_requires_both_partners() {
        let err = validate_progress("couple", 2, &json!({"partner_one": "Sam"}));
        match err {
            Err(AppError::Validation(details)) => {
                assert_eq!(details["partner_two"], true);
                assert!(details.get("partner_one").is_none());
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn step_out_of_range_is_rejected() {
        assert!(validate_progress("vendor", 0, &json!({})).is_err());
        assert!(validate_progress("vendor", VENDOR_STEPS + 1, &json!({})).is_err());
        assert!(validate_progress("couple", COUPLE_STEPS + 1, &json!({})).is_err());
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(matches!(
            validate_progress("planner", 1, &json!({})),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn draft_data_round_trips_unchanged() {
        // What the wizard saves is exactly what a reload gets back.
        let data = json!({
            "business_name": "Petal & Stem",
            "category": "florist",
            "city": "",
            "website": null,
            "media": ["https://cdn.example/1.jpg"]
        });
        let stored = serde_json::to_string(&data).unwrap();
        let restored: serde_json::Value = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, data);
    }
}
