use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NotificationPrefsRequest {
    pub email_messages: bool,
    pub email_reviews: bool,
    pub email_billing: bool,
}
