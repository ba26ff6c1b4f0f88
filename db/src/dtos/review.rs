use uuid::Uuid;

pub struct ReviewLinkCreateRequest {
    pub vendor_id: Uuid,
    pub token: String,
    pub recipient_email: String,
}

pub struct ReviewCreateRequest {
    pub vendor_id: Uuid,
    pub link_id: Uuid,
    pub reviewer_name: String,
    pub rating: i32,
    pub comment: Option<String>,
}
