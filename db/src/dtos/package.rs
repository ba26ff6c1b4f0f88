use sqlx::types::JsonValue;

pub struct PackageWrite {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub features: JsonValue,
}
