use chrono::NaiveDate;
use sqlx::types::JsonValue;

pub struct CoupleUpsert {
    pub partner_one: String,
    pub partner_two: String,
    pub wedding_date: Option<NaiveDate>,
    pub budget_cents: Option<i64>,
    pub city: Option<String>,
    pub media: JsonValue,
    pub is_public: bool,
}
