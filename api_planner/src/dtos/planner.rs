use serde::Deserialize;
use serde_json::Value;

/// Named seating arrangement; `layout` is a free-form document the
/// planner canvas owns.
#[derive(Debug, Deserialize)]
pub struct SeatingLayoutRequest {
    pub name: String,
    pub layout: Value,
}
