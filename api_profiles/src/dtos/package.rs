use db::dtos::package::PackageWrite;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct PackageRequest {
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    #[serde(default)]
    pub features: Vec<String>,
}

impl From<PackageRequest> for PackageWrite {
    fn from(req: PackageRequest) -> Self {
        PackageWrite {
            name: req.name,
            description: req.description,
            price_cents: req.price_cents,
            features: json!(req.features),
        }
    }
}

/// Full id sequence in the desired display order.
#[derive(Debug, Deserialize)]
pub struct PackageOrderRequest {
    pub package_ids: Vec<Uuid>,
}
