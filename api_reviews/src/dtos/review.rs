use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LinkCreateRequest {
    pub recipient_email: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitReviewRequest {
    pub reviewer_name: String,
    /// 1 to 5 stars.
    pub rating: i32,
    pub comment: Option<String>,
}

/// What the public review form needs to render its header.
#[derive(Debug, Serialize)]
pub struct ReviewFormResponse {
    pub vendor_name: String,
    pub recipient_email: String,
}
