//! Tests for the domain user model.

use super::*;
use rstest::rstest;

#[rstest]
#[case::simple("guest@example.com")]
#[case::mixed_case("Guest@Example.COM")]
#[case::subaddress("guest+tag@example.com")]
fn valid_addresses_are_accepted(#[case] address: &str) {
    let email = Email::new(address).expect("address should validate");

    assert_eq!(email.as_str(), address);
}

#[rstest]
#[case::empty("", EmailValidationError::Empty)]
#[case::blank("   ", EmailValidationError::Empty)]
#[case::padded(" guest@example.com ", EmailValidationError::SurroundingWhitespace)]
#[case::missing_at("guest.example.com", EmailValidationError::MalformedAddress)]
#[case::missing_domain("guest@", EmailValidationError::MalformedAddress)]
#[case::missing_local("@example.com", EmailValidationError::MalformedAddress)]
#[case::double_at("guest@host@example.com", EmailValidationError::MalformedAddress)]
#[case::embedded_space("gu est@example.com", EmailValidationError::MalformedAddress)]
fn invalid_addresses_are_rejected(#[case] address: &str, #[case] expected: EmailValidationError) {
    let err = Email::new(address).expect_err("address should be rejected");

    assert_eq!(err, expected);
}

#[rstest]
fn normalized_form_is_lowercase() {
    let email = Email::new("Guest@Example.COM").expect("address should validate");

    assert_eq!(email.normalized(), "guest@example.com");
    assert_eq!(email.as_str(), "Guest@Example.COM");
}

#[rstest]
fn differently_cased_addresses_share_a_normalized_form() {
    let upper = Email::new("A@X.com").expect("address should validate");
    let lower = Email::new("a@x.com").expect("address should validate");

    assert_eq!(upper.normalized(), lower.normalized());
}

#[rstest]
fn email_deserialization_revalidates() {
    let err = serde_json::from_str::<Email>("\"not-an-email\"");

    assert!(err.is_err());
}

#[rstest]
fn user_serde_round_trips() {
    let user = crate::test_support::sample_user();

    let encoded = serde_json::to_string(&user).expect("user should serialize");
    let decoded: User = serde_json::from_str(&encoded).expect("user should deserialize");

    assert_eq!(decoded, user);
}
