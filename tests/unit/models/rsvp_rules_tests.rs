// Unit tests for the RSVP form rules
// One row per rule, in the order the form reports them

use test_case::test_case;
use wedding_invitation::models::rsvp::{validate, Choice, RsvpResponse, ValidationError};

#[test_case("", "", Choice::Unset, Choice::Unset, Err(ValidationError::MissingFirstName) ; "empty first name")]
#[test_case("  ", "B", Choice::Yes, Choice::Yes, Err(ValidationError::MissingFirstName) ; "blank first name")]
#[test_case("A", "", Choice::Unset, Choice::Unset, Err(ValidationError::MissingLastName) ; "empty last name")]
#[test_case("A", "B", Choice::Unset, Choice::Unset, Err(ValidationError::MissingAttendance) ; "attendance unset")]
#[test_case("A", "B", Choice::Unset, Choice::Yes, Err(ValidationError::MissingAttendance) ; "companion without attendance")]
#[test_case("A", "B", Choice::Yes, Choice::Unset, Err(ValidationError::MissingCompanion) ; "attending companion unset")]
#[test_case("A", "B", Choice::No, Choice::Unset, Ok(()) ; "declined companion irrelevant")]
#[test_case("A", "B", Choice::Yes, Choice::No, Ok(()) ; "attending alone")]
#[test_case("A", "B", Choice::Yes, Choice::Yes, Ok(()) ; "attending with partner")]
fn test_rule_order(
    first: &str,
    last: &str,
    attending: Choice,
    companion: Choice,
    expected: Result<(), ValidationError>,
) {
    let response = RsvpResponse::new(first, last, attending, companion);
    assert_eq!(validate(&response), expected);
}

#[test_case(ValidationError::MissingFirstName, "provide first name")]
#[test_case(ValidationError::MissingLastName, "provide last name")]
#[test_case(ValidationError::MissingAttendance, "specify attendance")]
#[test_case(ValidationError::MissingCompanion, "specify companion")]
fn test_error_text(error: ValidationError, expected: &str) {
    assert_eq!(error.to_string(), expected);
}
