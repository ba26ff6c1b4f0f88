pub struct UserCreateRequest {
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub stripe_customer_id: Option<String>,
}
