use chrono::NaiveDate;
use db::dtos::{couple::CoupleUpsert, vendor::VendorUpsert};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, Deserialize)]
pub struct VendorProfileRequest {
    pub business_name: String,
    pub category: String,
    pub city: String,
    pub region: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    /// Hosted-storage URLs, in display order.
    #[serde(default)]
    pub media: Vec<String>,
}

impl From<VendorProfileRequest> for VendorUpsert {
    fn from(req: VendorProfileRequest) -> Self {
        VendorUpsert {
            business_name: req.business_name,
            category: req.category,
            city: req.city,
            region: req.region,
            description: req.description,
            phone: req.phone,
            website: req.website,
            media: json!(req.media),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoupleProfileRequest {
    pub partner_one: String,
    pub partner_two: String,
    pub wedding_date: Option<NaiveDate>,
    pub budget_cents: Option<i64>,
    pub city: Option<String>,
    #[serde(default)]
    pub media: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
}

impl From<CoupleProfileRequest> for CoupleUpsert {
    fn from(req: CoupleProfileRequest) -> Self {
        CoupleUpsert {
            partner_one: req.partner_one,
            partner_two: req.partner_two,
            wedding_date: req.wedding_date,
            budget_cents: req.budget_cents,
            city: req.city,
            media: json!(req.media),
            is_public: req.is_public,
        }
    }
}
