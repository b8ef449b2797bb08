use serde::Deserialize;

/// Row of the `profiles` table. Only the columns the billing page selects.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub stripe_is_subscribed: Option<bool>,
}

impl Profile {
    /// Column list for the profile read.
    pub const SELECT: &'static str = "id,name,email,stripe_is_subscribed";

    pub fn is_subscribed(&self) -> bool {
        self.stripe_is_subscribed.unwrap_or(false)
    }

    /// Name if set, otherwise the local part of the email, otherwise "User".
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            return name.to_string();
        }
        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .filter(|local| !local.is_empty())
            .unwrap_or("User")
            .to_string()
    }

    pub fn initials(&self) -> String {
        let name = self.display_name();
        let initials: String = name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect();

        if initials.chars().count() >= 2 {
            initials.to_uppercase()
        } else {
            name.chars().take(2).collect::<String>().to_uppercase()
        }
    }
}
