use serde::Serialize;

/// What the visitor typed into the contact form. Nothing delivers it yet; whoever
/// takes over delivery gets this through the form's `on_submit` callback.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn from_fields(name: &str, email: &str, website: &str, message: &str) -> Self {
        let website = website.trim();
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            website: (!website.is_empty()).then(|| website.to_string()),
            message: message.trim().to_string(),
        }
    }

    /// Form-encoding friendly view, keyed by the inputs' `name` attributes.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("name", self.name.clone()),
            ("email", self.email.clone()),
        ];
        if let Some(website) = &self.website {
            pairs.push(("website", website.clone()));
        }
        pairs.push(("message", self.message.clone()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fields_are_trimmed_and_blank_website_dropped() {
        let msg = ContactMessage::from_fields("  Anna ", "anna@example.eu\n", "   ", " Need a new site ");
        assert_eq!(msg.name, "Anna");
        assert_eq!(msg.email, "anna@example.eu");
        assert_eq!(msg.website, None);
        assert_eq!(msg.message, "Need a new site");
    }

    #[test]
    fn pairs_follow_form_order() {
        let msg = ContactMessage::from_fields("Anna", "anna@example.eu", "https://anna.eu", "Hi");
        let keys: Vec<&str> = msg.to_pairs().iter().map(|(key, _)| *key).collect();
        assert_eq!(keys, ["name", "email", "website", "message"]);

        let without_site = ContactMessage::from_fields("Anna", "anna@example.eu", "", "Hi");
        assert_eq!(without_site.to_pairs().len(), 3);
    }

    #[test]
    fn json_omits_missing_website() {
        let msg = ContactMessage::from_fields("Anna", "anna@example.eu", "", "Hi");
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({ "name": "Anna", "email": "anna@example.eu", "message": "Hi" })
        );
    }
}
