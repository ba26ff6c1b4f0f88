use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ActivityRequest {
    pub activity: String,
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct MetricsQuery {
    /// Trailing window in days; defaults to 30.
    pub days: Option<i64>,
}
