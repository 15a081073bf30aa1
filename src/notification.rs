use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    message: String,
    #[serde(default)]
    urgency: Urgency,
}

impl Notification {
    pub fn new(message: impl Into<String>, urgency: Urgency) -> Self {
        Self {
            message: message.into(),
            urgency,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Low, Urgency::Medium, Urgency::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown urgency: {0} (expected low, medium or high)")]
pub struct ParseUrgencyError(String);

impl FromStr for Urgency {
    type Err = ParseUrgencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Urgency::Low),
            "medium" | "normal" => Ok(Urgency::Medium),
            "high" => Ok(Urgency::High),
            _ => Err(ParseUrgencyError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_defaults_to_medium() {
        assert_eq!(Urgency::default(), Urgency::Medium);

        let notification: Notification = toml::from_str(r#"message = "disk full""#).unwrap();
        assert_eq!(notification.urgency(), Urgency::Medium);
        assert_eq!(notification.message(), "disk full");
    }

    #[test]
    fn urgency_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Urgency>().unwrap(), Urgency::High);
        assert_eq!(" low ".parse::<Urgency>().unwrap(), Urgency::Low);
        assert_eq!("normal".parse::<Urgency>().unwrap(), Urgency::Medium);
        assert!("urgent".parse::<Urgency>().is_err());
    }
}
