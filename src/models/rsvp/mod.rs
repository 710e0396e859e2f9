// RSVP model
// Guest answer collected by the survey form, plus the rules that decide
// whether it can be sent.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A yes/no answer that the guest may not have given yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Choice {
    Yes,
    No,
    #[default]
    Unset,
}

impl Choice {
    pub fn is_set(&self) -> bool {
        !matches!(self, Choice::Unset)
    }
}

/// The guest's answer to the invitation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RsvpResponse {
    pub first_name: String,
    pub last_name: String,
    pub attending: Choice,
    /// Only meaningful when `attending` is `Choice::Yes`.
    pub companion: Choice,
}

impl RsvpResponse {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        attending: Choice,
        companion: Choice,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            attending,
            companion,
        }
    }

    /// First and last name, trimmed and joined with a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Companion answer as it should be reported: ignored unless attending.
    pub fn effective_companion(&self) -> Option<Choice> {
        match self.attending {
            Choice::Yes => Some(self.companion),
            Choice::No | Choice::Unset => None,
        }
    }

    /// Check the answer against the form rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate(self)
    }
}

/// First broken form rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("provide first name")]
    MissingFirstName,
    #[error("provide last name")]
    MissingLastName,
    #[error("specify attendance")]
    MissingAttendance,
    #[error("specify companion")]
    MissingCompanion,
}

impl ValidationError {
    /// Inline text shown under the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingFirstName => "Please provide your first name",
            ValidationError::MissingLastName => "Please provide your last name",
            ValidationError::MissingAttendance => "Please let us know whether you can attend",
            ValidationError::MissingCompanion => {
                "Please let us know whether you will come with your partner"
            }
        }
    }
}

/// Validate an answer, reporting only the first rule that fails.
///
/// Rules are checked in a fixed order: first name, last name, attendance,
/// then companion (only when attending).
pub fn validate(response: &RsvpResponse) -> Result<(), ValidationError> {
    if response.first_name.trim().is_empty() {
        return Err(ValidationError::MissingFirstName);
    }
    if response.last_name.trim().is_empty() {
        return Err(ValidationError::MissingLastName);
    }

    match (response.attending, response.companion) {
        (Choice::Unset, _) => Err(ValidationError::MissingAttendance),
        (Choice::Yes, Choice::Unset) => Err(ValidationError::MissingCompanion),
        (Choice::Yes, Choice::Yes | Choice::No) | (Choice::No, _) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_response_is_unset() {
        let response = RsvpResponse::default();
        assert_eq!(response.attending, Choice::Unset);
        assert_eq!(response.companion, Choice::Unset);
        assert!(!response.attending.is_set());
    }

    #[test]
    fn test_whitespace_only_names_are_rejected() {
        let response = RsvpResponse::new("   ", "Petrov", Choice::No, Choice::Unset);
        assert_eq!(validate(&response), Err(ValidationError::MissingFirstName));

        let response = RsvpResponse::new("Ivan", "\t", Choice::No, Choice::Unset);
        assert_eq!(validate(&response), Err(ValidationError::MissingLastName));
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Everything is missing: only the first-name rule is reported.
        let response = RsvpResponse::default();
        assert_eq!(response.validate(), Err(ValidationError::MissingFirstName));
    }

    #[test]
    fn test_companion_ignored_when_not_attending() {
        let response = RsvpResponse::new("Ivan", "Petrov", Choice::No, Choice::Yes);
        assert!(response.validate().is_ok());
        assert_eq!(response.effective_companion(), None);
    }

    #[test]
    fn test_full_name_trims_parts() {
        let response = RsvpResponse::new(" Ivan ", "Petrov  ", Choice::Yes, Choice::No);
        assert_eq!(response.full_name(), "Ivan Petrov");
        assert_eq!(response.effective_companion(), Some(Choice::No));
    }

    #[test]
    fn test_error_display_matches_rule() {
        assert_eq!(ValidationError::MissingCompanion.to_string(), "specify companion");
        assert!(ValidationError::MissingAttendance
            .user_message()
            .contains("attend"));
    }
}
