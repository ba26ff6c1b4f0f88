use serde::Deserialize;

/// Contact-form payload. Fields arrive optional so the handler can flag
/// every missing one at once.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    /// Returns the validated message, or a `details` map whose keys are
    /// exactly the missing fields, each flagged `true`.
    pub fn validate(&self) -> Result<ContactMessage, serde_json::Value> {
        let mut details = serde_json::Map::new();

        let field = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let name = field(&self.name);
        if name.is_none() {
            details.insert("name".to_string(), serde_json::Value::Bool(true));
        }
        let email = field(&self.email);
        if email.is_none() {
            details.insert("email".to_string(), serde_json::Value::Bool(true));
        }
        let subject = field(&self.subject);
        if subject.is_none() {
            details.insert("subject".to_string(), serde_json::Value::Bool(true));
        }
        let message = field(&self.message);
        if message.is_none() {
            details.insert("message".to_string(), serde_json::Value::Bool(true));
        }

        if !details.is_empty() {
            return Err(serde_json::Value::Object(details));
        }

        Ok(ContactMessage {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            subject: subject.unwrap_or_default(),
            message: message.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> ContactRequest {
        ContactRequest {
            name: Some("Sam".to_string()),
            email: Some("sam@example.com".to_string()),
            subject: Some("Availability".to_string()),
            message: Some("Are you free in June?".to_string()),
        }
    }

    #[test]
    fn complete_payload_passes() {
        assert!(full_request().validate().is_ok());
    }

    #[test]
    fn missing_fields_are_each_flagged() {
        let req = ContactRequest {
            name: None,
            email: Some(" ".to_string()),
            ..full_request()
        };
        let details = req.validate().unwrap_err();
        let details = details.as_object().unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details["name"], true);
        assert_eq!(details["email"], true);
    }
}
