use sqlx::types::JsonValue;

pub struct VendorUpsert {
    pub business_name: String,
    pub category: String,
    pub city: String,
    pub region: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub media: JsonValue,
}
